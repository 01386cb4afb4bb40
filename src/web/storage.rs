//! Thin wrapper over the browser's localStorage.
//!
//! All `web_sys::Storage` access goes through this module so the rest of
//! the crate stays free of raw browser calls.

use wasm_bindgen::prelude::*;

/// Static accessor for browser localStorage.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Returns the stored value, or `None` if the key is missing or the
    /// storage API is unavailable.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Stores a raw string value. Returns `false` on failure.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Removes the key. Returns `false` on failure.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// Registers a callback for the window `storage` event, which fires when
/// another tab writes to localStorage (covers cross-tab logout).
///
/// The closure is leaked so the listener stays alive for the lifetime of
/// the page.
pub fn on_storage_change<F>(callback: F)
where
    F: Fn() + 'static,
{
    let closure = Closure::<dyn Fn()>::new(callback);

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
