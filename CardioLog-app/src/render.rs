//! Plain-text rendering of journal views

use chrono::{DateTime, Local, Utc};

use cardio_log_domain::entities::summary::display_value;
use cardio_log_domain::entities::{BloodPressureCategory, DisplaySummary, Reading};
use cardio_log_domain::services::{DashboardStatus, HistoryRow, TrendPoint};

const TIMESTAMP_FORMAT: &str = "%d %b %H:%M";

/// Format a timestamp in the host's local time zone
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

/// "SYS / DIA", with the not-recorded marker for a missing diastolic
pub fn format_pressure(systolic: i32, diastolic: Option<i32>) -> String {
    format!("{} / {}", systolic, display_value(diastolic))
}

fn badge(category: BloodPressureCategory) -> String {
    format!("[{}]", category.label())
}

/// The dashboard widget
pub fn render_dashboard(user_name: &str, status: &DashboardStatus) -> String {
    let mut out = format!("{}\n", user_name);

    let systolic = match status.summary.systolic() {
        Some(systolic) => systolic,
        None => {
            out.push_str("No readings yet\n");
            return out;
        }
    };

    out.push_str(&status.summary.label());
    if let DisplaySummary::Latest { timestamp, .. } = &status.summary {
        out.push_str(&format!(" ({})", format_timestamp(timestamp)));
    }
    if let DisplaySummary::Average { reading_count, .. } = &status.summary {
        out.push_str(&format!(" over {} readings", reading_count));
    }
    out.push('\n');

    out.push_str(&format_pressure(systolic, status.summary.diastolic()));
    if let Some(category) = status.category {
        out.push_str(&format!("  {}", badge(category)));
    }
    out.push('\n');
    out.push_str(&format!("Pulse: {} bpm\n", display_value(status.summary.pulse())));
    out
}

/// One line describing a single reading
pub fn render_reading(reading: &Reading, category: BloodPressureCategory) -> String {
    let mut line = format!(
        "{}  {}  {:>9}  pulse {:>3}  {}",
        reading.id,
        format_timestamp(&reading.timestamp),
        format_pressure(reading.systolic, reading.diastolic),
        display_value(reading.pulse),
        badge(category),
    );
    if !reading.note.is_empty() {
        line.push_str("  ");
        line.push_str(&reading.note);
    }
    line
}

/// The history table, newest first
pub fn render_history(rows: &[HistoryRow]) -> String {
    if rows.is_empty() {
        return "History is empty\n".to_string();
    }

    rows.iter()
        .map(|row| render_reading(&row.reading, row.category) + "\n")
        .collect()
}

/// The trend series as one line per point
pub fn render_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return "No readings to plot\n".to_string();
    }

    points
        .iter()
        .map(|point| {
            format!(
                "{}  {}\n",
                format_timestamp(&point.timestamp),
                format_pressure(point.systolic, point.diastolic)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardio_log_domain::entities::AverageBasis;
    use cardio_log_domain::services::views::dashboard_status;

    #[test]
    fn test_format_pressure_marks_missing_diastolic() {
        assert_eq!(format_pressure(130, Some(85)), "130 / 85");
        assert_eq!(format_pressure(130, None), "130 / —");
    }

    #[test]
    fn test_render_empty_dashboard() {
        let out = render_dashboard("Anna", &dashboard_status(DisplaySummary::NoData));
        assert_eq!(out, "Anna\nNo readings yet\n");
    }

    #[test]
    fn test_render_average_dashboard() {
        let status = dashboard_status(DisplaySummary::Average {
            window_days: 7,
            basis: AverageBasis::Window,
            reading_count: 3,
            systolic: 142,
            diastolic: None,
            pulse: Some(71),
        });

        let out = render_dashboard("Anna", &status);
        assert!(out.contains("7-day average over 3 readings"));
        assert!(out.contains("142 / —  [Hypertension]"));
        assert!(out.contains("Pulse: 71 bpm"));
    }

    #[test]
    fn test_render_history_rows() {
        let reading = Reading {
            id: "abc".to_string(),
            timestamp: Utc::now(),
            systolic: 185,
            diastolic: Some(100),
            pulse: None,
            note: "dizzy".to_string(),
        };
        let rows = vec![HistoryRow {
            reading,
            category: BloodPressureCategory::HypertensiveCrisis,
        }];

        let out = render_history(&rows);
        assert!(out.starts_with("abc  "));
        assert!(out.contains("185 / 100"));
        assert!(out.contains("pulse   —"));
        assert!(out.contains("[Critical]  dizzy"));

        assert_eq!(render_history(&[]), "History is empty\n");
    }
}
