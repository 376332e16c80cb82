//! Selection of the latest reading on a calendar day

use crate::error::{ReportError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use station_data::{Reading, ReadingTable};

/// The most recent reading recorded on a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Day the snapshot describes
    pub date: NaiveDate,
    /// The reading with the greatest timestamp on that day
    pub reading: Reading,
}

/// Select "current conditions" for the reference instant's date.
///
/// Partitions rows by the date component of their timestamp, keeps the
/// rows matching `reference`'s date, and returns the one with the maximum
/// timestamp. Ties go to the row that appears later in input order.
///
/// # Arguments
/// * `table` - The reading table, never mutated
/// * `reference` - "Now", already normalized to the reporting timezone
///
/// # Returns
/// * `Result<Snapshot, ReportError>` - The snapshot, `EmptyTable` for a
///   table with no rows at all, or `NoDataForDate` when other days have
///   data but this one does not. Data from other days is never
///   substituted.
pub fn select_daily_snapshot(table: &ReadingTable, reference: NaiveDateTime) -> Result<Snapshot> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let date = reference.date();
    match latest_on(table, date) {
        Some(reading) => Ok(Snapshot {
            date,
            reading: reading.clone(),
        }),
        None => Err(ReportError::NoDataForDate(date)),
    }
}

/// Latest reading on `date`; timestamp ties resolve to the later input row.
pub(crate) fn latest_on(table: &ReadingTable, date: NaiveDate) -> Option<&Reading> {
    let mut latest: Option<&Reading> = None;

    for reading in table.rows() {
        if reading.timestamp.date() != date {
            continue;
        }
        match latest {
            Some(current) if reading.timestamp < current.timestamp => {}
            _ => latest = Some(reading),
        }
    }

    latest
}
