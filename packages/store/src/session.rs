//! # Session: the single persisted credential
//!
//! The remote notes API authenticates every note operation with an opaque bearer
//! token handed out by `POST /users/signIn`. This module owns that token on the
//! client side.
//!
//! ## [`TokenStore`] trait
//!
//! A synchronous interface with three methods: [`get`](TokenStore::get),
//! [`set`](TokenStore::set) and [`clear`](TokenStore::clear), over exactly one
//! value. Implementations live in sibling modules:
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | [`MemoryStore`](crate::MemoryStore) | `memory` | tests, native builds |
//! | `LocalStorageStore` | `local` | the browser (`wasm32` + `web` feature) |
//!
//! A backend whose storage is unavailable must degrade to a no-op: writes are
//! dropped and reads report no token.
//!
//! ## [`Session`]
//!
//! The handle the rest of the workspace passes around. It wraps one backend
//! behind an `Arc`, so every clone observes the same token. There is no expiry,
//! no refresh and no change notification: whoever needs the token reads it at the
//! moment they need it.

use std::fmt;
use std::sync::Arc;

/// Storage key used when no configuration overrides it.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Backing storage for the session token.
pub trait TokenStore: fmt::Debug + Send + Sync {
    /// Read the persisted token, if any.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing whatever was stored before.
    fn set(&self, token: &str);

    /// Forget the persisted token.
    fn clear(&self);
}

/// Shared handle to the current session token.
#[derive(Clone, Debug)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// A session backed by process memory.
    pub fn in_memory() -> Self {
        Self::new(crate::MemoryStore::new())
    }

    /// The current token. An empty stored value counts as no token.
    pub fn get(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) {
        self.store.set(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

impl PartialEq for Session {
    /// Two handles are equal when they share the same backend.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}
