// CardioLog Domain
// This crate contains the business logic for the CardioLog journal

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Re-export the storage layer for convenience
pub use cardio_log_data::{config, repository};

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use entities::{BloodPressureCategory, DisplaySummary, NewReading, Reading};
pub use services::{classify, summarize, JournalService, JournalServiceError};
