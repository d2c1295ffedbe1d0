//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application shell and modal surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod app_shell;
pub mod header;
pub mod photo_modal;
pub mod property_card;
pub mod review_modal;
pub mod sidebar;
pub mod theme_toggle;
