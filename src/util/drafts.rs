//! Form drafts kept in `localStorage` across reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `DraftSlot` names one JSON-encoded draft. Reads and writes are
//! hydrate-only; on the server every slot is empty and writes are dropped.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Typed handle to a single persisted draft.
#[derive(Debug)]
pub struct DraftSlot<T> {
    key: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> Clone for DraftSlot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DraftSlot<T> {}

impl<T: Serialize + DeserializeOwned> DraftSlot<T> {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key, _value: PhantomData }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored draft, or `None` if absent or no longer decodable.
    #[must_use]
    pub fn load(&self) -> Option<T> {
        decode(read_raw(self.key)?.as_str())
    }

    pub fn save(&self, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => write_raw(self.key, Some(&raw)),
            Err(e) => log::warn!("failed to encode draft {}: {e}", self.key),
        }
    }

    pub fn clear(&self) {
        write_raw(self.key, None);
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

fn read_raw(key: &str) -> Option<String> {
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

fn write_raw(key: &str, raw: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = match raw {
            Some(raw) => storage.set_item(key, raw),
            None => storage.remove_item(key),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, raw);
    }
}
