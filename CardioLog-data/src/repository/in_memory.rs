use std::sync::{Arc, Mutex};

use crate::models::blood_pressure::JournalDocument;
use super::errors::RepositoryError;

/// In-memory storage for the journal document
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    document: Arc<Mutex<JournalDocument>>,
}

impl InMemoryStorage {
    /// Create a new, empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory storage seeded with a document
    pub fn with_document(document: JournalDocument) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    /// Get a copy of the stored document
    pub fn load(&self) -> Result<JournalDocument, RepositoryError> {
        let document = self.document.lock()?;
        Ok(document.clone())
    }

    /// Replace the stored document
    pub fn persist(&self, document: &JournalDocument) -> Result<(), RepositoryError> {
        let mut stored = self.document.lock()?;
        *stored = document.clone();
        Ok(())
    }
}
