use crate::entities::blood_pressure::Reading;
use cardio_log_data::models::blood_pressure::StoredReading;

/// Conversion functions between domain entities and data models.
/// These functions follow the pattern convert_to_[target_layer]_[model_name].

/// Convert from data model to domain entity for a reading
pub fn convert_to_domain_reading(data_reading: StoredReading) -> Reading {
    Reading {
        id: data_reading.id,
        timestamp: data_reading.timestamp,
        systolic: data_reading.systolic,
        diastolic: data_reading.diastolic,
        pulse: data_reading.pulse,
        note: data_reading.note,
    }
}

/// Convert from domain entity to data model for a reading
pub fn convert_to_data_reading(domain_reading: &Reading) -> StoredReading {
    StoredReading {
        id: domain_reading.id.clone(),
        timestamp: domain_reading.timestamp,
        systolic: domain_reading.systolic,
        diastolic: domain_reading.diastolic,
        pulse: domain_reading.pulse,
        note: domain_reading.note.clone(),
    }
}
