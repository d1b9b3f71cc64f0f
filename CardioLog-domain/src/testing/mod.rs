// Testing utilities for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test mocks from the data layer
pub use cardio_log_data::repository::tests::MockJournalRepository;

use cardio_log_data::models::blood_pressure::{JournalDocument, StoredReading};
use cardio_log_data::repository::InMemoryStorage;
use chrono::{DateTime, Utc};

use crate::services::journal::{JournalService, JournalServiceError};

/// Builder for journal documents used as test fixtures
#[derive(Debug, Clone, Default)]
pub struct JournalFixture {
    document: JournalDocument,
}

impl JournalFixture {
    /// Start with an empty journal and the default profile name
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name
    pub fn user(mut self, name: &str) -> Self {
        self.document.user_name = name.to_string();
        self
    }

    /// Add a reading with a generated id
    pub fn reading(
        self,
        timestamp: DateTime<Utc>,
        systolic: i32,
        diastolic: Option<i32>,
        pulse: Option<i32>,
    ) -> Self {
        let id = format!("fixture-{}", self.document.records.len() + 1);
        self.reading_with_id(&id, timestamp, systolic, diastolic, pulse)
    }

    /// Add a reading with an explicit id
    pub fn reading_with_id(
        mut self,
        id: &str,
        timestamp: DateTime<Utc>,
        systolic: i32,
        diastolic: Option<i32>,
        pulse: Option<i32>,
    ) -> Self {
        self.document.records.push(StoredReading {
            id: id.to_string(),
            timestamp,
            systolic,
            diastolic,
            pulse,
            note: String::new(),
        });
        self
    }

    pub fn into_document(self) -> JournalDocument {
        self.document
    }

    /// Load a journal service over a mock repository seeded with the fixture
    pub fn into_mock_service(self) -> Result<JournalService<MockJournalRepository>, JournalServiceError> {
        JournalService::load(MockJournalRepository::with_document(self.document))
    }

    /// Load a journal service over in-memory storage seeded with the fixture
    pub fn into_memory_service(self) -> Result<JournalService<InMemoryStorage>, JournalServiceError> {
        JournalService::load(InMemoryStorage::with_document(self.document))
    }
}
