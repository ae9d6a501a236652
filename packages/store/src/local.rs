//! # localStorage token store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] implementation used on the **web
//! platform**. It keeps the session token in the origin-scoped
//! `window.localStorage`, so a signed-in user stays signed in across reloads and
//! tabs of the same origin.
//!
//! ## Connection management
//!
//! The store holds only the key name. It looks up `window.localStorage` on every
//! operation; `web_sys::Storage` is not `Send`, and the lookup is a cheap property
//! read.
//!
//! ## Error handling
//!
//! Storage can be missing (no `window`) or disabled (private browsing, sandboxed
//! iframes, quota errors). All methods swallow those errors: reads return `None`
//! and writes do nothing, which the rest of the app sees as "signed out".

use web_sys::Storage;

use crate::session::TokenStore;

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        self.storage()?.get_item(&self.key).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
