use serde::Serialize;
use chrono::{DateTime, Utc};

/// Marker shown in place of a value that was not recorded
pub const NOT_RECORDED: &str = "—";

/// Which readings an average was computed over
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AverageBasis {
    /// Readings inside the recency window
    Window,
    /// The whole collection, because the window held no readings
    AllTime,
}

/// What the dashboard should show for a collection of readings
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplaySummary {
    /// The collection is empty; render a placeholder and do not classify
    NoData,

    /// The latest reading was taken today and is shown as is
    Latest {
        reading_id: String,
        timestamp: DateTime<Utc>,
        systolic: i32,
        diastolic: Option<i32>,
        pulse: Option<i32>,
    },

    /// Rounded means over the recency window (or over everything)
    Average {
        window_days: u32,
        basis: AverageBasis,
        reading_count: usize,
        systolic: i32,
        diastolic: Option<i32>,
        pulse: Option<i32>,
    },
}

impl DisplaySummary {
    pub fn is_no_data(&self) -> bool {
        matches!(self, DisplaySummary::NoData)
    }

    pub fn label(&self) -> String {
        match self {
            DisplaySummary::NoData => "No data".to_string(),
            DisplaySummary::Latest { .. } => "Most recent reading".to_string(),
            DisplaySummary::Average { window_days, .. } => format!("{}-day average", window_days),
        }
    }

    pub fn systolic(&self) -> Option<i32> {
        match self {
            DisplaySummary::NoData => None,
            DisplaySummary::Latest { systolic, .. } | DisplaySummary::Average { systolic, .. } => Some(*systolic),
        }
    }

    pub fn diastolic(&self) -> Option<i32> {
        match self {
            DisplaySummary::NoData => None,
            DisplaySummary::Latest { diastolic, .. } | DisplaySummary::Average { diastolic, .. } => *diastolic,
        }
    }

    pub fn pulse(&self) -> Option<i32> {
        match self {
            DisplaySummary::NoData => None,
            DisplaySummary::Latest { pulse, .. } | DisplaySummary::Average { pulse, .. } => *pulse,
        }
    }
}

/// Render an optional measurement, using [`NOT_RECORDED`] when absent
pub fn display_value(value: Option<i32>) -> String {
    value.map_or_else(|| NOT_RECORDED.to_string(), |v| v.to_string())
}
