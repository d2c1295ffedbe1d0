//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `theme`, `ui`, `carousel`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod carousel;
pub mod theme;
pub mod ui;
