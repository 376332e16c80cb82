//! Bundled dashboard feed: snapshot, forecast and chart series in one call

use crate::error::{ReportError, Result};
use crate::forecast::{build_forecast, ForecastEntry};
use crate::resample::{resample_by_bucket, BucketedSeries};
use crate::snapshot::{select_daily_snapshot, Snapshot};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use station_data::ReadingTable;

/// Tuning knobs for [`build_daily_report`]
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Number of future days in the forecast panel
    pub horizon_days: u32,
    /// Width of the chart buckets
    pub bucket_width: Duration,
}

impl Default for ReportOptions {
    /// The constants the dashboards share: a 3-day panel over 3-hour
    /// chart buckets.
    fn default() -> Self {
        Self {
            horizon_days: 3,
            bucket_width: Duration::hours(3),
        }
    }
}

/// Everything a dashboard page renders for one reference instant
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    /// Latest reading of the reference day, `None` when that day has no
    /// rows. The absence is explicit; no other day's data stands in.
    pub snapshot: Option<Snapshot>,
    /// Exactly `horizon_days` entries, absent-valued where data is missing
    pub forecast: Vec<ForecastEntry>,
    /// Bucket averages of the reference day for charting
    pub series: BucketedSeries,
}

/// Build the snapshot, forecast and chart series in one pass.
///
/// Data absence never fails the bundle: a reference day without rows
/// yields `snapshot: None` and an empty series, and missing forecast days
/// yield absent-valued entries. Only a caller mistake (an out-of-range
/// bucket width) is an error.
pub fn build_daily_report(
    table: &ReadingTable,
    reference: NaiveDateTime,
    options: ReportOptions,
) -> Result<DailyReport> {
    let snapshot = match select_daily_snapshot(table, reference) {
        Ok(snapshot) => Some(snapshot),
        Err(ReportError::EmptyTable) | Err(ReportError::NoDataForDate(_)) => None,
        Err(err) => return Err(err),
    };

    let forecast = build_forecast(table, reference, options.horizon_days);
    let series = resample_by_bucket(table, reference.date(), options.bucket_width)?;

    log::debug!(
        "Daily report for {}: snapshot {}, {} forecast entries, {} chart buckets",
        reference.date(),
        if snapshot.is_some() { "present" } else { "absent" },
        forecast.len(),
        series.len()
    );

    Ok(DailyReport {
        snapshot,
        forecast,
        series,
    })
}
