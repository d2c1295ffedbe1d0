//! # rental-ui
//!
//! Leptos + WASM frontend for the property rental and management
//! application: property browsing, bookings, payments, authentication and
//! role-based dashboards over the rental REST API.
//!
//! The logic-bearing pieces are the persisted theme resolver
//! ([`state::theme`]), role-based navigation ([`util::navigation`]) and the
//! photo carousel ([`state::carousel`]); everything else is page and
//! component glue.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
