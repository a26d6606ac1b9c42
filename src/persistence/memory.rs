//! In-process backend. Values last only as long as the process.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{KeyValueStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Pre-populates entries, e.g. to simulate a previous session.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: RwLock::new(entries) }
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_replaces_value() {
        let kv = MemoryStore::with_entries([("mw_cart", "[]")]);
        assert_eq!(kv.get("mw_cart").await.unwrap().as_deref(), Some("[]"));
        kv.set("mw_cart", "[1]".into()).await.unwrap();
        assert_eq!(kv.get("mw_cart").await.unwrap().as_deref(), Some("[1]"));
        assert!(kv.get("mw_orders").await.unwrap().is_none());
    }
}
