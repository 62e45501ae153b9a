//! JSON list-document persistence.
//!
//! Each store owns one file shaped as `{"<field>": [...], "lastUpdated": ts}`.
//! Entries are opaque `Value`s; every save fully replaces the list. Writes
//! are serialized behind a per-store mutex so concurrent saves cannot
//! interleave (last writer still wins, but never with a torn file).

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed store for a single named list.
pub struct JsonListStore {
    path: PathBuf,
    field: &'static str,
    write_lock: Mutex<()>,
}

impl JsonListStore {
    pub fn new(path: impl Into<PathBuf>, field: &'static str) -> Self {
        Self {
            path: path.into(),
            field,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list from disk.
    ///
    /// An absent file is an empty list, as is a document without the list
    /// field. A present-but-unparseable file is an error.
    pub async fn load(&self) -> Result<Vec<Value>, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let doc: Value = serde_json::from_str(&content)?;
        Ok(doc
            .get(self.field)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Replace the document with the given list and a fresh `lastUpdated`.
    ///
    /// Creates the parent directory if needed.
    pub async fn save(&self, items: &[Value]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut doc = Map::new();
        doc.insert(self.field.to_string(), Value::Array(items.to_vec()));
        doc.insert(
            "lastUpdated".into(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );

        let content = serde_json::to_string_pretty(&Value::Object(doc))?;
        fs::write(&self.path, content).await?;

        tracing::debug!(path = %self.path.display(), count = items.len(), "store saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir, field: &'static str) -> JsonListStore {
        JsonListStore::new(dir.path().join(format!("{field}.json")), field)
    }

    #[tokio::test]
    async fn test_load_absent_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "accounts");
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "accounts");

        let items = vec![json!({"handle": "@a"}), json!({"handle": "@b"})];
        store.save(&items).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, items);
    }

    #[tokio::test]
    async fn test_save_replaces_previous_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "urls");

        store.save(&[json!("https://a.example")]).await.unwrap();
        store.save(&[json!("https://b.example")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, vec![json!("https://b.example")]);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = JsonListStore::new(dir.path().join("nested/deep/accounts.json"), "accounts");
        store.save(&[]).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_document_carries_rfc3339_last_updated() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "accounts");
        store.save(&[json!({"handle": "@a"})]).await.unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let doc: Value = serde_json::from_str(&content).unwrap();
        let ts = doc["lastUpdated"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
        assert!(doc["accounts"].is_array());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "accounts");
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn test_load_document_missing_field_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "accounts");
        std::fs::write(store.path(), r#"{"lastUpdated": "2025-01-01T00:00:00Z"}"#).unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_entry_order_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, "accounts");

        let items: Vec<Value> = (0..20).map(|i| json!({"idx": i})).collect();
        store.save(&items).await.unwrap();
        assert_eq!(store.load().await.unwrap(), items);
    }
}
