use crate::entities::blood_pressure::Reading;
use crate::entities::category::BloodPressureCategory;

/// Diastolic value substituted when a reading has none
pub const DIASTOLIC_PLACEHOLDER: i32 = 80;

/// Categorize blood pressure based on measurements.
///
/// Checks run from most to least severe and the first match wins, so a
/// diastolic in the hypertension range outranks an elevated systolic.
/// Any pair of integers is accepted.
pub fn classify(systolic: i32, diastolic: i32) -> BloodPressureCategory {
    if systolic > 180 || diastolic > 110 {
        BloodPressureCategory::HypertensiveCrisis
    } else if systolic >= 140 || diastolic >= 90 {
        BloodPressureCategory::Hypertension
    } else if systolic >= 120 {
        BloodPressureCategory::Elevated
    } else {
        BloodPressureCategory::Normal
    }
}

/// Categorize a stored reading, substituting [`DIASTOLIC_PLACEHOLDER`] for a
/// missing diastolic value
pub fn classify_reading(reading: &Reading) -> BloodPressureCategory {
    classify(reading.systolic, reading.diastolic.unwrap_or(DIASTOLIC_PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_bp_category_normal() {
        assert_eq!(classify(110, 70), BloodPressureCategory::Normal);
        assert_eq!(classify(119, 89), BloodPressureCategory::Normal);
    }

    #[test]
    fn test_bp_category_elevated() {
        assert_eq!(classify(125, 70), BloodPressureCategory::Elevated);
        assert_eq!(classify(120, 60), BloodPressureCategory::Elevated);
        assert_eq!(classify(139, 89), BloodPressureCategory::Elevated);
    }

    #[test]
    fn test_bp_category_hypertension() {
        // Systolic in range
        assert_eq!(classify(150, 70), BloodPressureCategory::Hypertension);
        assert_eq!(classify(140, 70), BloodPressureCategory::Hypertension);

        // Diastolic in range
        assert_eq!(classify(110, 90), BloodPressureCategory::Hypertension);
        assert_eq!(classify(180, 110), BloodPressureCategory::Hypertension);
    }

    #[test]
    fn test_diastolic_checked_before_elevated_systolic() {
        assert_eq!(classify(125, 95), BloodPressureCategory::Hypertension);
    }

    #[test]
    fn test_bp_category_crisis() {
        // Systolic in range
        assert_eq!(classify(185, 70), BloodPressureCategory::HypertensiveCrisis);
        assert_eq!(classify(181, 70), BloodPressureCategory::HypertensiveCrisis);

        // Diastolic in range
        assert_eq!(classify(120, 111), BloodPressureCategory::HypertensiveCrisis);
    }

    #[test]
    fn test_unvalidated_values_are_accepted() {
        assert_eq!(classify(0, 0), BloodPressureCategory::Normal);
        assert_eq!(classify(-20, -5), BloodPressureCategory::Normal);
        assert_eq!(classify(i32::MAX, 0), BloodPressureCategory::HypertensiveCrisis);
    }

    #[test]
    fn test_category_never_improves_as_pressure_rises() {
        for systolic in (0..=260).step_by(5) {
            for diastolic in (0..=160).step_by(5) {
                let base = classify(systolic, diastolic);
                assert!(classify(systolic + 5, diastolic) >= base, "{}+5/{}", systolic, diastolic);
                assert!(classify(systolic, diastolic + 5) >= base, "{}/{}+5", systolic, diastolic);
            }
        }
    }

    #[test]
    fn test_classify_reading_uses_placeholder() {
        let mut reading = Reading {
            id: "r".to_string(),
            timestamp: Utc::now(),
            systolic: 125,
            diastolic: None,
            pulse: None,
            note: String::new(),
        };
        assert_eq!(classify_reading(&reading), BloodPressureCategory::Elevated);

        reading.diastolic = Some(95);
        assert_eq!(classify_reading(&reading), BloodPressureCategory::Hypertension);
    }
}
