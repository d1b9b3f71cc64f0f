use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};

/// Profile name used when the stored document carries none
pub const DEFAULT_USER_NAME: &str = "User";

/// Storage model for a blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReading {
    /// Unique identifier for the reading; older journals stored a number
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// When the reading was taken, stored as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,

    /// Systolic blood pressure (the higher number)
    #[serde(alias = "sys")]
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number), absent when not recorded
    #[serde(default, alias = "dia", skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<i32>,

    /// Pulse rate in beats per minute, absent when not recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<i32>,

    /// Free-text note
    #[serde(default)]
    pub note: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// The unit that is loaded at startup and rewritten on every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalDocument {
    /// Profile name shown on the dashboard
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Every stored reading, in no particular order
    #[serde(default)]
    pub records: Vec<StoredReading>,
}

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

impl Default for JournalDocument {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            records: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_fields_use_defaults() {
        let document: JournalDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(document, JournalDocument::default());
        assert_eq!(document.user_name, "User");
    }

    #[test]
    fn test_optional_values_are_not_zero() {
        let json = r#"{
            "userName": "Anna",
            "records": [
                {"id": "a", "timestamp": 1700000000000, "systolic": 128}
            ]
        }"#;

        let document: JournalDocument = serde_json::from_str(json).unwrap();
        let reading = &document.records[0];
        assert_eq!(reading.systolic, 128);
        assert_eq!(reading.diastolic, None);
        assert_eq!(reading.pulse, None);
        assert_eq!(reading.note, "");
        assert_eq!(reading.timestamp, Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
    }

    #[test]
    fn test_loads_web_journal_records() {
        let json = r#"{
            "userName": "Anna",
            "records": [
                {
                    "id": 1700000000123,
                    "timestamp": 1700000000000,
                    "dateString": "14.11.2023",
                    "timeString": "22:13",
                    "sys": 135,
                    "dia": 88,
                    "pulse": 74,
                    "note": ""
                }
            ]
        }"#;

        let document: JournalDocument = serde_json::from_str(json).unwrap();
        let reading = &document.records[0];
        assert_eq!(reading.id, "1700000000123");
        assert_eq!(reading.systolic, 135);
        assert_eq!(reading.diastolic, Some(88));
        assert_eq!(reading.pulse, Some(74));

        // Rewritten with the current field names
        let value = serde_json::to_value(reading).unwrap();
        assert_eq!(value["id"], "1700000000123");
        assert_eq!(value["systolic"], 135);
        assert!(value.get("sys").is_none());
    }

    #[test]
    fn test_absent_values_are_omitted_when_written() {
        let reading = StoredReading {
            id: "b".to_string(),
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            systolic: 140,
            diastolic: None,
            pulse: Some(70),
            note: String::new(),
        };

        let value = serde_json::to_value(&reading).unwrap();
        assert!(value.get("diastolic").is_none());
        assert_eq!(value["pulse"], 70);
        assert_eq!(value["timestamp"], 1_700_000_000_000i64);
    }
}
