// Domain entities and value objects
pub mod blood_pressure;
pub mod category;
pub mod conversions;
pub mod summary;

// Re-export common types for easier imports
pub use blood_pressure::{NewReading, Reading};
pub use category::{BloodPressureCategory, CategoryDescriptor};
pub use summary::{AverageBasis, DisplaySummary, NOT_RECORDED};
