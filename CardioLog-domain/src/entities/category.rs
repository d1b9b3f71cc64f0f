use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity category of a blood pressure reading, mildest first.
///
/// The derived ordering follows severity, so `Normal < HypertensiveCrisis`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BloodPressureCategory {
    /// Below every elevated threshold
    Normal,

    /// Systolic 120 or above, below the hypertension thresholds
    Elevated,

    /// Systolic 140 or above, or diastolic 90 or above
    Hypertension,

    /// Systolic above 180, or diastolic above 110
    HypertensiveCrisis,
}

/// Display attributes of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub category: BloodPressureCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
}

impl BloodPressureCategory {
    /// Every category, mildest first
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Normal,
        BloodPressureCategory::Elevated,
        BloodPressureCategory::Hypertension,
        BloodPressureCategory::HypertensiveCrisis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::Hypertension => "Hypertension",
            BloodPressureCategory::HypertensiveCrisis => "Critical",
        }
    }

    /// Foreground color used for the pressure figures
    pub fn color(self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "#388E3C",
            BloodPressureCategory::Elevated => "#FBC02D",
            BloodPressureCategory::Hypertension => "#F57C00",
            BloodPressureCategory::HypertensiveCrisis => "#D32F2F",
        }
    }

    /// Badge background color
    pub fn background_color(self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "#E8F5E9",
            BloodPressureCategory::Elevated => "#FFFDE7",
            BloodPressureCategory::Hypertension => "#FFF3E0",
            BloodPressureCategory::HypertensiveCrisis => "#FFEBEE",
        }
    }

    /// Badge text color. Yellow on pale yellow is unreadable, so Elevated
    /// badges use a darker amber.
    pub fn text_color(self) -> &'static str {
        match self {
            BloodPressureCategory::Elevated => "#F57F17",
            other => other.color(),
        }
    }

    pub fn descriptor(self) -> CategoryDescriptor {
        CategoryDescriptor {
            category: self,
            label: self.label(),
            color: self.color(),
            background_color: self.background_color(),
            text_color: self.text_color(),
        }
    }

    pub fn is_crisis(self) -> bool {
        self == BloodPressureCategory::HypertensiveCrisis
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_severity() {
        let mut sorted = BloodPressureCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, BloodPressureCategory::ALL);
        assert!(BloodPressureCategory::Normal < BloodPressureCategory::HypertensiveCrisis);
    }

    #[test]
    fn test_descriptor_carries_display_attributes() {
        let descriptor = BloodPressureCategory::HypertensiveCrisis.descriptor();
        assert_eq!(descriptor.label, "Critical");
        assert_eq!(descriptor.color, "#D32F2F");
        assert_eq!(descriptor.background_color, "#FFEBEE");
        assert_eq!(descriptor.text_color, "#D32F2F");

        let elevated = BloodPressureCategory::Elevated.descriptor();
        assert_ne!(elevated.text_color, elevated.color);
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let value = serde_json::to_value(BloodPressureCategory::Normal.descriptor()).unwrap();
        assert_eq!(value["category"], "Normal");
        assert_eq!(value["backgroundColor"], "#E8F5E9");
        assert_eq!(value["textColor"], "#388E3C");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(BloodPressureCategory::Hypertension.to_string(), "Hypertension");
        assert!(BloodPressureCategory::HypertensiveCrisis.is_crisis());
        assert!(!BloodPressureCategory::Hypertension.is_crisis());
    }
}
