use chrono::{DateTime, Local, TimeZone, Utc};

use crate::entities::blood_pressure::Reading;
use crate::entities::summary::{AverageBasis, DisplaySummary};

/// Recency window used by the dashboard unless configured otherwise
pub const DEFAULT_RECENCY_WINDOW_DAYS: u32 = 7;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Summarize readings for display, relative to the local wall clock.
///
/// See [`summarize_at`].
pub fn summarize(records: &[Reading], recency_window_days: u32) -> DisplaySummary {
    summarize_at(records, recency_window_days, &Local::now())
}

/// Summarize readings for display, relative to `now`.
///
/// - No readings: [`DisplaySummary::NoData`].
/// - Latest reading taken on the same calendar day as `now` (in `now`'s time
///   zone): that reading, unchanged.
/// - Otherwise: rounded means over readings less than `recency_window_days`
///   days old, or over every reading when none are that recent. Diastolic and
///   pulse means only count readings that have those values.
pub fn summarize_at<Tz: TimeZone>(
    records: &[Reading],
    recency_window_days: u32,
    now: &DateTime<Tz>,
) -> DisplaySummary {
    let Some(latest) = records.iter().max_by_key(|reading| reading.timestamp) else {
        return DisplaySummary::NoData;
    };

    if is_same_calendar_day(&latest.timestamp, now) {
        return DisplaySummary::Latest {
            reading_id: latest.id.clone(),
            timestamp: latest.timestamp,
            systolic: latest.systolic,
            diastolic: latest.diastolic,
            pulse: latest.pulse,
        };
    }

    let now_utc = now.with_timezone(&Utc);
    let window_ms = i64::from(recency_window_days) * MILLIS_PER_DAY;
    let recent: Vec<&Reading> = records
        .iter()
        .filter(|reading| (now_utc - reading.timestamp).num_milliseconds() < window_ms)
        .collect();

    let (basis, included) = if recent.is_empty() {
        (AverageBasis::AllTime, records.iter().collect::<Vec<_>>())
    } else {
        (AverageBasis::Window, recent)
    };

    // `included` is never empty here, so the systolic mean always exists
    let systolic = rounded_mean(included.iter().map(|r| r.systolic)).unwrap_or(latest.systolic);

    DisplaySummary::Average {
        window_days: recency_window_days,
        basis,
        reading_count: included.len(),
        systolic,
        diastolic: rounded_mean(included.iter().filter_map(|r| r.diastolic)),
        pulse: rounded_mean(included.iter().filter_map(|r| r.pulse)),
    }
}

fn is_same_calendar_day<Tz: TimeZone>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    timestamp.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

/// Arithmetic mean rounded half away from zero; `None` for no values
pub fn rounded_mean(values: impl IntoIterator<Item = i32>) -> Option<i32> {
    let (sum, count) = values
        .into_iter()
        .fold((0i64, 0i64), |(sum, count), value| (sum + i64::from(value), count + 1));

    if count == 0 {
        return None;
    }

    Some((sum as f64 / count as f64).round() as i32)
}
