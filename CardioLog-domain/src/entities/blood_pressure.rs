use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use validator::Validate;

/// Domain model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Unique identifier for the reading
    pub id: String,

    /// When the reading was taken
    pub timestamp: DateTime<Utc>,

    /// Systolic blood pressure (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number), `None` when not recorded
    pub diastolic: Option<i32>,

    /// Pulse rate in beats per minute, `None` when not recorded
    pub pulse: Option<i32>,

    /// Free-text note, empty when none was given
    pub note: String,
}

/// Request payload for recording a new blood pressure reading
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewReading {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 40, max = 300, message = "Systolic must be between 40 and 300"))]
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 20, max = 200, message = "Diastolic must be between 20 and 200"))]
    pub diastolic: Option<i32>,

    /// Optional pulse rate in beats per minute
    #[validate(range(min = 20, max = 250, message = "Pulse must be between 20 and 250"))]
    pub pulse: Option<i32>,

    /// Optional note about the reading
    #[validate(length(max = 1000, message = "Note cannot exceed 1000 characters"))]
    pub note: Option<String>,

    /// When the reading was taken. Defaults to the current time if not provided.
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewReading {
    /// Start a request with only the mandatory systolic value
    pub fn new(systolic: i32) -> Self {
        Self {
            systolic,
            ..Self::default()
        }
    }

    pub fn with_diastolic(mut self, diastolic: i32) -> Self {
        self.diastolic = Some(diastolic);
        self
    }

    pub fn with_pulse(mut self, pulse: i32) -> Self {
        self.pulse = Some(pulse);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_leaves_optional_values_absent() {
        let request = NewReading::new(128);
        assert_eq!(request.systolic, 128);
        assert_eq!(request.diastolic, None);
        assert_eq!(request.pulse, None);
        assert_eq!(request.note, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_range_validation() {
        assert!(NewReading::new(350).validate().is_err());
        assert!(NewReading::new(120).with_diastolic(10).validate().is_err());
        assert!(NewReading::new(120).with_pulse(300).validate().is_err());
        assert!(NewReading::new(120).with_diastolic(80).with_pulse(65).validate().is_ok());
    }

    #[test]
    fn test_note_length_validation() {
        let long_note = "x".repeat(1001);
        let errors = NewReading::new(120).with_note(long_note).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("note"));
    }
}
