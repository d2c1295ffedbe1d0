//! Local UI chrome state (sidebar, modals).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`auth`,
//! listings) so shell controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation shell and modals.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sidebar_open: bool,
    pub review_modal_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, review_modal_open: false }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}
