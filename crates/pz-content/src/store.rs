use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{ContentError, ContentResult};
use crate::kind::ContentKind;

/// Raw storage for content documents.
///
/// Stores deal in untyped JSON; parsing into [`crate::Content`] happens in
/// the cache so a store can be swapped without touching the item types.
pub trait ContentStore: Send + Sync {
    /// Load the document for `kind`, or `None` if there is none.
    fn load(&self, kind: ContentKind) -> ContentResult<Option<Value>>;

    /// Replace the document for `kind`.
    fn save(&self, kind: ContentKind, value: &Value) -> ContentResult<()>;
}

/// A store that keeps one `<kind>.json` file per collection in a directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`. The directory is not touched until
    /// the first load or save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the content files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `kind`.
    pub fn path_for(&self, kind: ContentKind) -> PathBuf {
        self.root.join(format!("{}.json", kind.as_str()))
    }
}

impl ContentStore for FsStore {
    fn load(&self, kind: ContentKind) -> ContentResult<Option<Value>> {
        let path = self.path_for(kind);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ContentError::Io { path, source }),
        };
        let value =
            serde_json::from_str(&text).map_err(|source| ContentError::Json { kind, source })?;
        Ok(Some(value))
    }

    fn save(&self, kind: ContentKind, value: &Value) -> ContentResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|source| ContentError::Io {
            path: self.root.clone(),
            source,
        })?;
        let path = self.path_for(kind);
        let mut text = serde_json::to_string_pretty(value)
            .map_err(|source| ContentError::Json { kind, source })?;
        text.push('\n');
        std::fs::write(&path, text).map_err(|source| ContentError::Io { path, source })
    }
}

/// An in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<ContentKind, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for setting up fixtures.
    pub fn with(mut self, kind: ContentKind, value: Value) -> Self {
        if let Ok(docs) = self.documents.get_mut() {
            docs.insert(kind, value);
        }
        self
    }
}

impl ContentStore for MemoryStore {
    fn load(&self, kind: ContentKind) -> ContentResult<Option<Value>> {
        let docs = self.documents.read().map_err(|_| ContentError::Poisoned)?;
        Ok(docs.get(&kind).cloned())
    }

    fn save(&self, kind: ContentKind, value: &Value) -> ContentResult<()> {
        let mut docs = self.documents.write().map_err(|_| ContentError::Poisoned)?;
        docs.insert(kind, value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn fs_store_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        assert!(store.load(ContentKind::Tarot).unwrap().is_none());
    }

    #[test]
    fn fs_store_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path().join("content"));
        let doc = json!([{ "animal": "Oso" }]);
        store.save(ContentKind::Rueda, &doc).unwrap();

        assert!(store.path_for(ContentKind::Rueda).ends_with("rueda.json"));
        assert_eq!(store.load(ContentKind::Rueda).unwrap(), Some(doc));
    }

    #[test]
    fn fs_store_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let store = FsStore::new(dir.path());
        store
            .save(ContentKind::Spreads, &json!({ "a": { "oraculo": "tarot", "cartas": 1 } }))
            .unwrap();
        let text = std::fs::read_to_string(store.path_for(ContentKind::Spreads)).unwrap();
        assert!(text.contains("\n  \"a\""));
    }

    #[test]
    fn fs_store_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tarot.json"), "[{").unwrap();
        let store = FsStore::new(dir.path());
        let err = store.load(ContentKind::Tarot).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Json {
                kind: ContentKind::Tarot,
                ..
            }
        ));
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new().with(ContentKind::IChing, json!([]));
        assert_eq!(store.load(ContentKind::IChing).unwrap(), Some(json!([])));
        assert!(store.load(ContentKind::Tarot).unwrap().is_none());
        store.save(ContentKind::Tarot, &json!([])).unwrap();
        assert!(store.load(ContentKind::Tarot).unwrap().is_some());
    }
}
