//! `localStorage` preference store

use tracing::warn;
use web_sys::{Storage, Window};

use crate::prefs::PreferenceStore;

/// Falls back to a no-op when storage is unavailable (private browsing,
/// sandboxed iframes).
#[derive(Clone)]
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(?e, "localStorage unavailable, preferences will not persist");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                warn!(key, ?e, "Failed to persist preference");
            }
        }
    }
}
