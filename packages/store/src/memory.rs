use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items
            .lock()
            .map(|items| items.contains_key(key))
            .unwrap_or(false)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_items() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("user", "{}").unwrap();
        assert_eq!(other.get_item("user").as_deref(), Some("{}"));
        assert_eq!(other.len(), 1);

        other.remove_item("user").unwrap();
        assert!(store.is_empty());
        assert!(!store.contains("user"));
    }

    #[test]
    fn test_overwrite_is_last_writer_wins() {
        let store = MemoryStore::new();
        store.set_item("access_token", "first").unwrap();
        store.set_item("access_token", "second").unwrap();
        assert_eq!(store.get_item("access_token").as_deref(), Some("second"));
    }
}
