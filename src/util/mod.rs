//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure derivations
//! from page and component logic to improve reuse and testability.

pub mod auth;
pub mod navigation;
pub mod reviews;
pub mod theme_dom;
pub mod drafts;
