use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;
use validator::Validate;

use cardio_log_data::models::blood_pressure::JournalDocument;
use cardio_log_data::repository::{JournalRepositoryTrait, RepositoryError};

use crate::entities::blood_pressure::{NewReading, Reading};
use crate::entities::conversions;
use crate::services::aggregator::summarize_at;
use crate::services::views::{self, DashboardStatus, HistoryRow, TrendPoint};

/// Journal service errors
#[derive(Debug, Error)]
pub enum JournalServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Reading not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Map repository errors to service errors
fn map_repo_error(err: RepositoryError) -> JournalServiceError {
    JournalServiceError::RepositoryError(err.to_string())
}

/// Validate a new reading request
pub fn validate_new_reading(request: &NewReading) -> Result<(), JournalServiceError> {
    if let Err(validation_errors) = request.validate() {
        let mut fields: Vec<String> = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let error_msgs: Vec<String> = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                    .collect();
                format!("{}: {}", field, error_msgs.join(", "))
            })
            .collect();
        fields.sort();

        return Err(JournalServiceError::ValidationError(fields.join("; ")));
    }

    if let Some(diastolic) = request.diastolic {
        if request.systolic <= diastolic {
            return Err(JournalServiceError::ValidationError(
                "Systolic pressure must be greater than diastolic pressure".to_string(),
            ));
        }
    }

    Ok(())
}

/// The reading journal: the record collection plus the profile name.
///
/// The document is loaded once. Every mutation builds the next state, writes
/// the whole document, and only then replaces the in-memory state, so a
/// failed write leaves the journal as it was.
pub struct JournalService<R: JournalRepositoryTrait> {
    repository: R,
    user_name: String,
    readings: HashMap<String, Reading>,
}

impl<R: JournalRepositoryTrait> JournalService<R> {
    /// Load the journal from a repository
    pub fn load(repository: R) -> Result<Self, JournalServiceError> {
        let document = repository.load().map_err(map_repo_error)?;

        let mut readings = HashMap::with_capacity(document.records.len());
        for record in document.records {
            if readings.contains_key(&record.id) {
                warn!("Dropping reading with duplicate id {}", record.id);
                continue;
            }
            readings.insert(record.id.clone(), conversions::convert_to_domain_reading(record));
        }

        debug!("Loaded journal for {} with {} readings", document.user_name, readings.len());

        Ok(Self {
            repository,
            user_name: document.user_name,
            readings,
        })
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Reading> {
        self.readings.get(id)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validate and record a new reading
    pub fn add_reading(&mut self, request: NewReading) -> Result<Reading, JournalServiceError> {
        validate_new_reading(&request)?;

        let reading = Reading {
            id: Uuid::new_v4().to_string(),
            timestamp: request.timestamp.unwrap_or_else(Utc::now),
            systolic: request.systolic,
            diastolic: request.diastolic,
            pulse: request.pulse,
            note: request.note.map(|note| note.trim().to_string()).unwrap_or_default(),
        };

        let mut readings = self.readings.clone();
        readings.insert(reading.id.clone(), reading.clone());
        self.commit(self.user_name.clone(), readings)?;

        info!(id = %reading.id, systolic = reading.systolic, "Recorded reading");
        Ok(reading)
    }

    /// Delete a reading by id
    pub fn delete_reading(&mut self, id: &str) -> Result<Reading, JournalServiceError> {
        let mut readings = self.readings.clone();
        let removed = readings
            .remove(id)
            .ok_or_else(|| JournalServiceError::NotFound(format!("Reading with ID {} not found", id)))?;

        self.commit(self.user_name.clone(), readings)?;

        info!(id = %id, "Deleted reading");
        Ok(removed)
    }

    /// Delete every reading, returning how many were removed
    pub fn clear_all(&mut self) -> Result<usize, JournalServiceError> {
        let count = self.readings.len();
        self.commit(self.user_name.clone(), HashMap::new())?;

        info!(count, "Cleared journal");
        Ok(count)
    }

    /// Change the profile name
    pub fn rename(&mut self, name: &str) -> Result<(), JournalServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JournalServiceError::ValidationError(
                "Profile name cannot be empty".to_string(),
            ));
        }

        self.commit(name.to_string(), self.readings.clone())?;

        info!(user_name = %name, "Renamed profile");
        Ok(())
    }

    /// Every reading, oldest first
    pub fn chronological(&self) -> Vec<Reading> {
        let mut readings: Vec<Reading> = self.readings.values().cloned().collect();
        views::sort_chronological(&mut readings);
        readings
    }

    /// History rows, newest first
    pub fn history(&self) -> Vec<HistoryRow> {
        views::history_rows(&self.chronological())
    }

    /// The last `limit` readings for the trend chart, oldest first
    pub fn trend(&self, limit: usize) -> Vec<TrendPoint> {
        views::trend_series(&self.chronological(), limit)
    }

    /// Dashboard status relative to the local wall clock
    pub fn dashboard(&self, recency_window_days: u32) -> DashboardStatus {
        self.dashboard_at(recency_window_days, &Local::now())
    }

    /// Dashboard status relative to `now`
    pub fn dashboard_at<Tz: TimeZone>(&self, recency_window_days: u32, now: &DateTime<Tz>) -> DashboardStatus {
        let summary = summarize_at(&self.chronological(), recency_window_days, now);
        views::dashboard_status(summary)
    }

    fn commit(
        &mut self,
        user_name: String,
        readings: HashMap<String, Reading>,
    ) -> Result<(), JournalServiceError> {
        let mut ordered: Vec<Reading> = readings.values().cloned().collect();
        views::sort_chronological(&mut ordered);

        let document = JournalDocument {
            user_name: user_name.clone(),
            records: ordered.iter().map(conversions::convert_to_data_reading).collect(),
        };

        if let Err(e) = self.repository.persist(&document) {
            error!("Failed to persist journal: {}", e);
            return Err(map_repo_error(e));
        }

        self.user_name = user_name;
        self.readings = readings;
        Ok(())
    }
}
