//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod contact;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod payment_failed;
pub mod properties;
pub mod property_detail;
pub mod section;
