//! File-per-key backend.
//!
//! Each key is stored at `<root>/<key>.json`. Writes go to
//! `<key>.json.tmp` first and are renamed into place, so a reader never
//! observes a half-written value.

use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) the storage directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path { &self.root }

    /// `<root>/<key>.json`. Keys are limited to ASCII alphanumerics, `_` and `-`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, value.as_bytes()).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_rejects_traversal() {
        let store = FileStore { root: PathBuf::from("/data/mw") };
        assert_eq!(store.path_for("mw_cart").unwrap(), PathBuf::from("/data/mw/mw_cart.json"));
        assert!(matches!(store.path_for("../etc/passwd"), Err(StorageError::InvalidKey(_))));
        assert!(matches!(store.path_for(""), Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_set_then_get_roundtrips() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FileStore::open(dir.path().join("nested")).await.unwrap();
        assert!(store.get("mw_orders").await.unwrap().is_none());

        store.set("mw_orders", "[]".into()).await.unwrap();
        store.set("mw_orders", r#"[{"id":"O1"}]"#.into()).await.unwrap();
        assert_eq!(store.get("mw_orders").await.unwrap().as_deref(), Some(r#"[{"id":"O1"}]"#));
        assert!(!store.root().join("mw_orders.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_reopen_sees_previous_writes() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        FileStore::open(dir.path()).await.unwrap().set("mw_wishlist", r#"["p1"]"#.into()).await.unwrap();
        let reopened = FileStore::open(dir.path()).await.unwrap();
        assert_eq!(reopened.get("mw_wishlist").await.unwrap().as_deref(), Some(r#"["p1"]"#));
        assert!(matches!(reopened.get("../mw_wishlist").await, Err(StorageError::InvalidKey(_))));
    }
}
