use tracing::{debug, warn};

use crate::config::{StorageConfig, StorageType};
use crate::models::blood_pressure::JournalDocument;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;
use super::storage::JsonFileStorage;

/// Repository trait for the reading journal.
///
/// The journal is read as a whole and written back as a whole; there are no
/// partial updates.
pub trait JournalRepositoryTrait {
    /// Load the complete journal document
    fn load(&self) -> Result<JournalDocument, RepositoryError>;

    /// Replace the stored journal document
    fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError>;
}

#[derive(Debug, Clone)]
enum Backend {
    File(JsonFileStorage),
    Memory(InMemoryStorage),
}

/// Repository for the reading journal.
/// Uses the JSON file backend when configured and falls back to memory when
/// the data directory is unusable.
#[derive(Debug, Clone)]
pub struct JournalRepository {
    backend: Backend,
}

impl Default for JournalRepository {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl JournalRepository {
    /// Create a repository that keeps the journal in memory
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(InMemoryStorage::new()),
        }
    }

    /// Create a repository from storage configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        match config.storage_type {
            StorageType::Memory => Self::in_memory(),
            StorageType::File => {
                let storage = JsonFileStorage::new(config.document_path());
                match storage.ensure_parent_dir() {
                    Ok(()) => Self {
                        backend: Backend::File(storage),
                    },
                    Err(e) => {
                        warn!("Data directory unusable ({}), falling back to in-memory storage", e);
                        Self::in_memory()
                    }
                }
            }
        }
    }

    /// Whether the journal survives the process
    pub fn is_persistent(&self) -> bool {
        matches!(self.backend, Backend::File(_))
    }
}

impl JournalRepositoryTrait for JournalRepository {
    fn load(&self) -> Result<JournalDocument, RepositoryError> {
        match &self.backend {
            Backend::File(storage) => {
                debug!("Loading journal from {}", storage.path().display());
                storage.load()
            }
            Backend::Memory(storage) => {
                debug!("Loading journal from memory");
                storage.load()
            }
        }
    }

    fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError> {
        match &self.backend {
            Backend::File(storage) => storage.persist(document),
            Backend::Memory(storage) => storage.persist(document),
        }
    }
}

impl JournalRepositoryTrait for InMemoryStorage {
    fn load(&self) -> Result<JournalDocument, RepositoryError> {
        InMemoryStorage::load(self)
    }

    fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError> {
        InMemoryStorage::persist(self, document)
    }
}

impl JournalRepositoryTrait for JsonFileStorage {
    fn load(&self) -> Result<JournalDocument, RepositoryError> {
        JsonFileStorage::load(self)
    }

    fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError> {
        JsonFileStorage::persist(self, document)
    }
}

/// Mock journal repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock implementation of JournalRepositoryTrait that records every write
    pub struct MockJournalRepository {
        initial: JournalDocument,
        persisted: Mutex<Vec<JournalDocument>>,
        should_fail_load: bool,
        should_fail_persist: bool,
    }

    impl Default for MockJournalRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockJournalRepository {
        /// Create a new mock repository holding an empty journal
        pub fn new() -> Self {
            Self::with_document(JournalDocument::default())
        }

        /// Create a mock repository holding a predefined document
        pub fn with_document(document: JournalDocument) -> Self {
            Self {
                initial: document,
                persisted: Mutex::new(Vec::new()),
                should_fail_load: false,
                should_fail_persist: false,
            }
        }

        /// Configure the mock to fail on load
        pub fn with_load_failure(mut self) -> Self {
            self.should_fail_load = true;
            self
        }

        /// Configure the mock to fail on persist
        pub fn with_persist_failure(mut self) -> Self {
            self.should_fail_persist = true;
            self
        }

        /// Every document written so far, oldest first
        pub fn persisted_documents(&self) -> Vec<JournalDocument> {
            self.persisted.lock().map(|docs| docs.clone()).unwrap_or_default()
        }

        /// The most recently written document
        pub fn last_persisted(&self) -> Option<JournalDocument> {
            self.persisted_documents().pop()
        }
    }

    impl JournalRepositoryTrait for MockJournalRepository {
        fn load(&self) -> Result<JournalDocument, RepositoryError> {
            if self.should_fail_load {
                return Err(RepositoryError::Lock("mock load failure".to_string()));
            }
            Ok(self.last_persisted().unwrap_or_else(|| self.initial.clone()))
        }

        fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError> {
            if self.should_fail_persist {
                return Err(RepositoryError::Lock("mock persist failure".to_string()));
            }
            self.persisted.lock()?.push(document.clone());
            Ok(())
        }
    }

    #[test]
    fn test_memory_config_builds_memory_repository() {
        let repository = JournalRepository::from_config(&StorageConfig::in_memory());
        assert!(!repository.is_persistent());

        let document = JournalDocument {
            user_name: "Anna".to_string(),
            records: Vec::new(),
        };
        repository.persist(&document).unwrap();
        assert_eq!(repository.load().unwrap(), document);
    }

    #[test]
    fn test_file_config_builds_file_repository() {
        let data_dir = std::env::temp_dir().join(format!("cardiolog_repo_{}", uuid::Uuid::new_v4()));
        let config = StorageConfig {
            storage_type: StorageType::File,
            data_dir: data_dir.clone(),
            storage_key: "journal".to_string(),
        };

        let repository = JournalRepository::from_config(&config);
        assert!(repository.is_persistent());
        assert!(data_dir.exists());

        repository.persist(&JournalDocument::default()).unwrap();
        assert!(config.document_path().exists());

        let _ = std::fs::remove_dir_all(&data_dir);
    }

    #[test]
    fn test_unusable_data_dir_falls_back_to_memory() {
        let blocker = std::env::temp_dir().join(format!("cardiolog_blocker_{}", uuid::Uuid::new_v4()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let config = StorageConfig {
            storage_type: StorageType::File,
            data_dir: blocker.join("nested"),
            storage_key: "journal".to_string(),
        };

        let repository = JournalRepository::from_config(&config);
        assert!(!repository.is_persistent());

        let _ = std::fs::remove_file(&blocker);
    }

    #[test]
    fn test_mock_records_writes() {
        let mock = MockJournalRepository::new();
        assert_eq!(mock.load().unwrap(), JournalDocument::default());

        let document = JournalDocument {
            user_name: "Vera".to_string(),
            records: Vec::new(),
        };
        mock.persist(&document).unwrap();

        assert_eq!(mock.persisted_documents().len(), 1);
        assert_eq!(mock.load().unwrap(), document);
    }

    #[test]
    fn test_mock_persist_failure() {
        let mock = MockJournalRepository::new().with_persist_failure();
        assert!(mock.persist(&JournalDocument::default()).is_err());
        assert!(mock.persisted_documents().is_empty());
    }
}
