//! Fixed-horizon forecast panel built from per-day representative readings
//!
//! The "forecast" here is not a predictive model: the station log already
//! contains rows for upcoming days (the upstream feed appends them ahead of
//! time), and the panel just shows each day's representative reading.

use crate::snapshot::latest_on;
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;
use station_data::ReadingTable;

/// One day of the forecast panel.
///
/// `values` is aligned with the table's schema. A day with no rows yields
/// an entry whose values are all absent; entries are never dropped, so
/// positional day-of-week labeling downstream stays aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    /// Days ahead of the reference date, starting at 1
    pub day_offset: u32,
    /// The calendar date this entry describes
    pub date: NaiveDate,
    /// Field values of the day's latest reading, in schema order
    pub values: Vec<Option<f64>>,
}

impl ForecastEntry {
    /// Whether the day had no data at all.
    pub fn is_absent(&self) -> bool {
        self.values.iter().all(|value| value.is_none())
    }
}

/// Build the forecast panel for the next `horizon_days` calendar days.
///
/// For each offset `1..=horizon_days` the entry carries the values of that
/// date's latest reading, selected exactly like the daily snapshot (max
/// timestamp, input order breaking ties). Days without rows produce
/// all-absent entries rather than being skipped or backfilled with stale
/// data, so the result always has exactly `horizon_days` entries.
///
/// The result depends only on the table contents and `reference`'s date
/// component.
pub fn build_forecast(
    table: &ReadingTable,
    reference: NaiveDateTime,
    horizon_days: u32,
) -> Vec<ForecastEntry> {
    let field_count = table.schema().field_count();
    let mut entries = Vec::with_capacity(horizon_days as usize);

    for offset in 1..=horizon_days {
        let date = reference.date() + Days::new(offset as u64);
        let values = match latest_on(table, date) {
            Some(reading) => reading.values.clone(),
            None => vec![None; field_count],
        };
        entries.push(ForecastEntry {
            day_offset: offset,
            date,
            values,
        });
    }

    entries
}
