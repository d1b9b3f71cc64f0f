//! Display-oriented projections of the reading collection.
//!
//! Sort order is decided here, never stored: history runs newest first,
//! trend series run oldest first.

use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::entities::blood_pressure::Reading;
use crate::entities::category::BloodPressureCategory;
use crate::entities::summary::DisplaySummary;
use crate::services::classifier::{classify, classify_reading, DIASTOLIC_PLACEHOLDER};

/// Number of readings plotted by default
pub const DEFAULT_TREND_LIMIT: usize = 10;

/// One row of the history table
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HistoryRow {
    pub reading: Reading,
    pub category: BloodPressureCategory,
}

/// One point of the trend chart; a missing diastolic leaves a gap
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendPoint {
    pub timestamp: DateTime<Utc>,
    pub systolic: i32,
    pub diastolic: Option<i32>,
}

/// The dashboard widget: a summary plus its category, if it has values
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStatus {
    pub summary: DisplaySummary,
    pub category: Option<BloodPressureCategory>,
}

/// Sort readings oldest first; ties are broken by id so output is stable
pub fn sort_chronological(readings: &mut [Reading]) {
    readings.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
}

/// History rows, newest first, each with its category
pub fn history_rows(readings: &[Reading]) -> Vec<HistoryRow> {
    let mut sorted = readings.to_vec();
    sort_chronological(&mut sorted);
    sorted
        .into_iter()
        .rev()
        .map(|reading| HistoryRow {
            category: classify_reading(&reading),
            reading,
        })
        .collect()
}

/// The last `limit` readings, oldest first
pub fn trend_series(readings: &[Reading], limit: usize) -> Vec<TrendPoint> {
    let mut sorted = readings.to_vec();
    sort_chronological(&mut sorted);
    let skip = sorted.len().saturating_sub(limit);
    sorted
        .iter()
        .skip(skip)
        .map(|reading| TrendPoint {
            timestamp: reading.timestamp,
            systolic: reading.systolic,
            diastolic: reading.diastolic,
        })
        .collect()
}

/// Attach a category to a summary. `NoData` is never classified.
pub fn dashboard_status(summary: DisplaySummary) -> DashboardStatus {
    let category = summary
        .systolic()
        .map(|systolic| classify(systolic, summary.diastolic().unwrap_or(DIASTOLIC_PLACEHOLDER)));

    DashboardStatus { summary, category }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::summary::AverageBasis;
    use chrono::{Duration, TimeZone};

    fn reading(id: &str, days_ago: i64, systolic: i32, diastolic: Option<i32>) -> Reading {
        Reading {
            id: id.to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap() - Duration::days(days_ago),
            systolic,
            diastolic,
            pulse: None,
            note: String::new(),
        }
    }

    #[test]
    fn test_history_is_newest_first_with_categories() {
        let readings = vec![
            reading("mid", 2, 125, Some(95)),
            reading("new", 0, 110, None),
            reading("old", 5, 190, Some(100)),
        ];

        let rows = history_rows(&readings);
        let ids: Vec<&str> = rows.iter().map(|row| row.reading.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        let categories: Vec<BloodPressureCategory> = rows.iter().map(|row| row.category).collect();
        assert_eq!(
            categories,
            vec![
                BloodPressureCategory::Normal,
                BloodPressureCategory::Hypertension,
                BloodPressureCategory::HypertensiveCrisis,
            ]
        );
    }

    #[test]
    fn test_trend_keeps_last_readings_oldest_first() {
        let readings: Vec<Reading> = (0..15)
            .map(|days_ago| reading(&format!("r{days_ago}"), days_ago, 100 + days_ago as i32, None))
            .collect();

        let series = trend_series(&readings, DEFAULT_TREND_LIMIT);
        assert_eq!(series.len(), 10);
        assert_eq!(series.first().map(|p| p.systolic), Some(109));
        assert_eq!(series.last().map(|p| p.systolic), Some(100));
        assert!(series.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }

    #[test]
    fn test_trend_shorter_than_limit() {
        let readings = vec![reading("a", 1, 120, Some(80)), reading("b", 0, 130, None)];
        let series = trend_series(&readings, 10);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].diastolic, None);
        assert!(trend_series(&[], 10).is_empty());
    }

    #[test]
    fn test_dashboard_status_classifies_with_placeholder() {
        let status = dashboard_status(DisplaySummary::Average {
            window_days: 7,
            basis: AverageBasis::Window,
            reading_count: 2,
            systolic: 125,
            diastolic: None,
            pulse: None,
        });
        assert_eq!(status.category, Some(BloodPressureCategory::Elevated));

        let status = dashboard_status(DisplaySummary::NoData);
        assert_eq!(status.category, None);
    }
}
