//! Whole-document read/write of an ordered keyed JSON object.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use toolcrib_core::{CoreError, CoreResult};

/// One persisted document: a JSON object mapping string keys to
/// records, kept in document order.
///
/// Every `load` re-reads the file and every `save` rewrites it in
/// full. `serde_json` is built with `preserve_order`, so the map
/// iterates in document order and written keys keep their insertion
/// order — the ordering callers see in listings and reports.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole document into ordered `(key, record)` pairs.
    ///
    /// A missing, unreadable, or malformed document is a
    /// `CoreError::Storage`; the store never repairs or re-seeds on a
    /// failed read.
    pub fn load<T: DeserializeOwned>(&self) -> CoreResult<Vec<(String, T)>> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| CoreError::storage(self.path.display().to_string(), e))?;

        let map: Map<String, Value> = serde_json::from_str(&text)
            .map_err(|e| CoreError::storage(self.path.display().to_string(), e))?;

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let record = serde_json::from_value(value).map_err(|e| {
                CoreError::storage(
                    self.path.display().to_string(),
                    format!("malformed entry '{key}': {e}"),
                )
            })?;
            entries.push((key, record));
        }
        Ok(entries)
    }

    /// Rewrite the whole document from ordered `(key, record)` pairs.
    ///
    /// Plain overwrite, matching the single-writer model: two
    /// concurrent mutations resolve as last-writer-wins.
    pub fn save<T: Serialize>(&self, entries: &[(String, T)]) -> CoreResult<()> {
        let mut map = Map::with_capacity(entries.len());
        for (key, record) in entries {
            let value = serde_json::to_value(record)
                .map_err(|e| CoreError::storage(self.path.display().to_string(), e))?;
            map.insert(key.clone(), value);
        }

        let text = serde_json::to_string_pretty(&map)
            .map_err(|e| CoreError::storage(self.path.display().to_string(), e))?;

        fs::write(&self.path, text)
            .map_err(|e| CoreError::storage(self.path.display().to_string(), e))?;

        tracing::debug!(path = %self.path.display(), entries = entries.len(), "document persisted");
        Ok(())
    }

    /// First-run seeding: write `entries` only if the document does
    /// not exist yet, creating parent directories as needed. Returns
    /// whether the document was created.
    pub fn create_if_missing<T: Serialize>(&self, entries: &[(String, T)]) -> CoreResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| CoreError::storage(self.path.display().to_string(), e))?;
        }
        self.save(entries)?;
        tracing::info!(path = %self.path.display(), "document seeded");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Row {
        count: u32,
        note: String,
    }

    fn row(count: u32, note: &str) -> Row {
        Row {
            count,
            note: note.to_string(),
        }
    }

    #[test]
    fn round_trips_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let doc = DocumentFile::new(dir.path().join("doc.json"));

        let entries = vec![
            ("zebra".to_string(), row(1, "z")),
            ("apple".to_string(), row(2, "a")),
            ("mango".to_string(), row(3, "m")),
        ];
        doc.save(&entries).unwrap();

        let loaded: Vec<(String, Row)> = doc.load().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn missing_document_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let doc = DocumentFile::new(dir.path().join("absent.json"));

        let err = doc.load::<Row>().unwrap_err();
        assert!(matches!(err, CoreError::Storage { .. }));
    }

    #[test]
    fn malformed_document_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let doc = DocumentFile::new(&path);
        let err = doc.load::<Row>().unwrap_err();
        assert!(matches!(err, CoreError::Storage { .. }));
    }

    #[test]
    fn malformed_entry_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entry.json");
        fs::write(&path, r#"{"saw": {"count": "three", "note": ""}}"#).unwrap();

        let doc = DocumentFile::new(&path);
        let err = doc.load::<Row>().unwrap_err();
        let CoreError::Storage { message, .. } = err else {
            panic!("expected storage error");
        };
        assert!(message.contains("saw"));
    }

    #[test]
    fn create_if_missing_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let doc = DocumentFile::new(dir.path().join("seed.json"));

        let first = vec![("saw".to_string(), row(1, "ok"))];
        assert!(doc.create_if_missing(&first).unwrap());

        let second = vec![("drill".to_string(), row(9, "no"))];
        assert!(!doc.create_if_missing(&second).unwrap());

        let loaded: Vec<(String, Row)> = doc.load().unwrap();
        assert_eq!(loaded, first);
    }

    #[test]
    fn create_if_missing_makes_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let doc = DocumentFile::new(dir.path().join("nested/deeper/doc.json"));

        assert!(doc.create_if_missing::<Row>(&[]).unwrap());
        let loaded: Vec<(String, Row)> = doc.load().unwrap();
        assert!(loaded.is_empty());
    }
}
