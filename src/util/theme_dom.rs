//! Browser bindings for the theme store.
//!
//! `BrowserStorage` reads and writes `localStorage`; `DocumentRoot` toggles
//! classes on the `<html>` element. Both look the browser objects up on every
//! call, so they stay zero-sized, `Send` and usable inside reactive signals.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and test builds
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::{DisplaySurface, PreferenceStore, ThemeResolver};

/// Theme resolver wired to the real browser.
pub type BrowserThemeResolver = ThemeResolver<BrowserStorage, DocumentRoot>;

/// Build the application's theme resolver without touching `localStorage`.
///
/// The stored preference is read later, from a client-only effect, so the
/// server render and the hydrating client agree on the initial state.
pub fn browser_theme_resolver(key: &str) -> BrowserThemeResolver {
    ThemeResolver::new(BrowserStorage, DocumentRoot, key)
}

/// `localStorage`-backed preference store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key} to localStorage");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Class list of the document's `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

#[cfg(feature = "hydrate")]
fn root_class_list() -> Option<web_sys::DomTokenList> {
    let doc = web_sys::window().and_then(|w| w.document())?;
    doc.document_element().map(|el| el.class_list())
}

impl DisplaySurface for DocumentRoot {
    fn add_marker(&mut self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(classes) = root_class_list() {
                let _ = classes.add_1(name);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }

    fn remove_marker(&mut self, name: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(classes) = root_class_list() {
                let _ = classes.remove_1(name);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    }
}
