use std::sync::{Arc, Mutex};

use crate::session::TokenStore;

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());

        store.set("token-1");
        assert_eq!(store.get().as_deref(), Some("token-1"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_slot() {
        let store = MemoryStore::new();
        let clone = store.clone();
        clone.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_shared_across_threads() {
        let store = MemoryStore::new();
        let writer = store.clone();
        std::thread::spawn(move || writer.set("from-thread"))
            .join()
            .unwrap();
        assert_eq!(store.get().as_deref(), Some("from-thread"));
    }
}
