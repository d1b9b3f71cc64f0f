pub mod aggregator;
pub mod classifier;
pub mod journal;
pub mod views;

// Domain services
// This module contains business logic implementations.

// Re-export the two core functions and the journal service
pub use aggregator::{summarize, summarize_at, DEFAULT_RECENCY_WINDOW_DAYS};
pub use classifier::{classify, classify_reading, DIASTOLIC_PLACEHOLDER};
pub use journal::{JournalService, JournalServiceError};
pub use views::{DashboardStatus, HistoryRow, TrendPoint, DEFAULT_TREND_LIMIT};
