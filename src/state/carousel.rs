//! Photo carousel state for the property photo modal.
//!
//! Index navigation wraps in both directions. An empty photo set is a valid
//! state in which every navigation call is a no-op and nothing can open.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoCarousel {
    photos: Vec<String>,
    index: usize,
    open: bool,
}

impl PhotoCarousel {
    #[must_use]
    pub fn new(photos: Vec<String>) -> Self {
        Self { photos, index: 0, open: false }
    }

    /// Replace the photo set, closing the modal and rewinding to the start.
    pub fn set_photos(&mut self, photos: Vec<String>) {
        *self = Self::new(photos);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    /// Open the modal on photo `index`, clamped to the last photo.
    pub fn open_at(&mut self, index: usize) {
        if self.photos.is_empty() {
            return;
        }
        self.index = index.min(self.photos.len() - 1);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        let n = self.photos.len();
        if n > 0 {
            self.index = (self.index + 1) % n;
        }
    }

    pub fn prev(&mut self) {
        let n = self.photos.len();
        if n > 0 {
            self.index = (self.index + n - 1) % n;
        }
    }

    /// URL of the photo currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.photos.get(self.index).map(String::as_str)
    }

    /// One-based `"k / n"` position indicator; empty when there are no photos.
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.photos.is_empty() {
            return String::new();
        }
        format!("{} / {}", self.index + 1, self.photos.len())
    }
}
