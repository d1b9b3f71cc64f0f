use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::models::blood_pressure::JournalDocument;
use super::errors::RepositoryError;

/// File storage for the journal document, written as pretty-printed JSON
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the directory holding the file exists
    pub fn ensure_parent_dir(&self) -> Result<(), RepositoryError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                debug!("Creating data directory: {}", parent.display());
                fs::create_dir_all(parent).map_err(|e| RepositoryError::io(parent, e))
            }
            _ => Ok(()),
        }
    }

    /// Read the document; a missing file yields an empty journal
    pub fn load(&self) -> Result<JournalDocument, RepositoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No journal at {}, starting empty", self.path.display());
                return Ok(JournalDocument::default());
            }
            Err(err) => {
                error!("Failed to read journal file {}: {}", self.path.display(), err);
                return Err(RepositoryError::io(&self.path, err));
            }
        };

        let document: JournalDocument = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to parse journal file {}: {}", self.path.display(), e);
            RepositoryError::Serialization(e)
        })?;

        debug!("Loaded {} readings from {}", document.records.len(), self.path.display());
        Ok(document)
    }

    /// Sibling file the next document is written to before it replaces the journal
    pub fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    /// Write the whole document, replacing the previous file
    ///
    /// The document goes to the staging file first and is renamed over the
    /// journal. An interrupted write leaves the previous journal intact.
    pub fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError> {
        self.ensure_parent_dir()?;
        let payload = serde_json::to_vec_pretty(document)?;

        let staging = self.staging_path();
        fs::write(&staging, payload).map_err(|e| RepositoryError::io(&staging, e))?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            error!("Failed to replace journal file {}: {}", self.path.display(), err);
            let _ = fs::remove_file(&staging);
            return Err(RepositoryError::io(&self.path, err));
        }
        debug!("Wrote {} readings to {}", document.records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blood_pressure::StoredReading;
    use chrono::{TimeZone, Utc};
    use std::env;

    fn unique_path(prefix: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("cardiolog_{}_{}", prefix, uuid::Uuid::new_v4()))
            .join("journal.json")
    }

    fn sample_document() -> JournalDocument {
        JournalDocument {
            user_name: "Anna".to_string(),
            records: vec![
                StoredReading {
                    id: "first".to_string(),
                    timestamp: Utc.with_ymd_and_hms(2026, 3, 1, 8, 30, 0).unwrap(),
                    systolic: 132,
                    diastolic: Some(84),
                    pulse: Some(71),
                    note: "after coffee".to_string(),
                },
                StoredReading {
                    id: "second".to_string(),
                    timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap(),
                    systolic: 126,
                    diastolic: None,
                    pulse: None,
                    note: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_missing_file_loads_empty_journal() {
        let storage = JsonFileStorage::new(unique_path("missing"));
        let document = storage.load().unwrap();
        assert_eq!(document, JournalDocument::default());
    }

    #[test]
    fn test_persist_then_load() {
        let path = unique_path("persist");
        let storage = JsonFileStorage::new(&path);
        let document = sample_document();

        storage.persist(&document).unwrap();
        assert!(path.exists());
        assert_eq!(storage.load().unwrap(), document);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_persist_leaves_no_staging_file() {
        let path = unique_path("staging");
        let storage = JsonFileStorage::new(&path);

        storage.persist(&sample_document()).unwrap();
        storage.persist(&JournalDocument::default()).unwrap();

        assert!(!storage.staging_path().exists());
        assert!(storage.staging_path().ends_with("journal.json.tmp"));
        assert_eq!(storage.load().unwrap(), JournalDocument::default());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_interrupted_write_keeps_previous_journal() {
        let path = unique_path("interrupted");
        let storage = JsonFileStorage::new(&path);
        let document = sample_document();
        storage.persist(&document).unwrap();

        // A write that died halfway only ever touches the staging file
        fs::write(storage.staging_path(), b"{ \"userName\": \"An").unwrap();

        assert_eq!(storage.load().unwrap(), document);

        storage.persist(&JournalDocument::default()).unwrap();
        assert_eq!(storage.load().unwrap(), JournalDocument::default());
        assert!(!storage.staging_path().exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = unique_path("corrupt");
        let storage = JsonFileStorage::new(&path);
        storage.ensure_parent_dir().unwrap();
        fs::write(&path, b"{ not json").unwrap();

        let result = storage.load();
        assert!(matches!(result, Err(RepositoryError::Serialization(_))));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
