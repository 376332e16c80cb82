//! Utility functions for the station data layer
//!
//! This module provides CSV loading, timestamp parsing, and synthetic data
//! generation for tests and demos.

use crate::{DataError, Reading, ReadingTable, TableSchema};
use chrono::{Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

/// Load sensor readings from a CSV file.
///
/// The file must have a header row naming at least the columns the schema
/// declares; extra columns are ignored. A typical station export looks like:
///
/// ```text
/// timestamp,temperature,humidity,pressure,distance,soil_moisture
/// 2024-01-01 09:00:00,21.4,58.0,1013.2,143.0,71.5
/// ```
///
/// Rows whose timestamp is missing or unparseable are skipped and counted
/// in [`ReadingTable::skipped_rows`]; a declared field that is empty or
/// non-numeric becomes an absent value for that row only. Input row order
/// is preserved.
///
/// # Arguments
/// * `file_path` - Path to the CSV file
/// * `schema` - Column configuration to load against
///
/// # Returns
/// * `Result<ReadingTable, DataError>` - Loaded table or error
pub fn load_readings<P: AsRef<Path>>(
    file_path: P,
    schema: &TableSchema,
) -> Result<ReadingTable, DataError> {
    let mut reader = csv::Reader::from_path(file_path)?;

    let headers = reader.headers()?.clone();
    let timestamp_index = headers
        .iter()
        .position(|name| name.trim() == schema.timestamp_column())
        .ok_or_else(|| {
            DataError::SchemaError(format!(
                "Timestamp column '{}' not found in CSV header",
                schema.timestamp_column()
            ))
        })?;

    let mut field_indices = Vec::with_capacity(schema.field_count());
    for field in schema.fields() {
        let index = headers
            .iter()
            .position(|name| name.trim() == field)
            .ok_or_else(|| {
                DataError::SchemaError(format!("Field column '{}' not found in CSV header", field))
            })?;
        field_indices.push(index);
    }

    let mut rows = Vec::new();
    let mut skipped_rows = 0usize;

    for (i, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                log::warn!("Skipping malformed CSV row {}: {}", i + 2, err);
                skipped_rows += 1;
                continue;
            }
        };

        let timestamp = match record.get(timestamp_index).and_then(parse_timestamp) {
            Some(timestamp) => timestamp,
            None => {
                log::warn!("Skipping row {} with unparseable timestamp", i + 2);
                skipped_rows += 1;
                continue;
            }
        };

        let values = field_indices
            .iter()
            .map(|&index| {
                record
                    .get(index)
                    .and_then(|raw| raw.trim().parse::<f64>().ok())
            })
            .collect();

        rows.push(Reading::new(timestamp, values));
    }

    log::debug!(
        "Loaded {} readings ({} rows skipped)",
        rows.len(),
        skipped_rows
    );

    ReadingTable::with_skipped(schema.clone(), rows, skipped_rows)
}

/// Parse a timestamp the way station exports write them.
///
/// Accepts `2024-01-01 09:30:00`, the ISO-8601 `T` variant with optional
/// fractional seconds and trailing `Z`, minute-resolution stamps, and bare
/// dates (interpreted as midnight). Returns `None` for anything else.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    let raw = raw.strip_suffix('Z').unwrap_or(raw);

    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    for format in FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Generate synthetic station readings for testing and demos.
///
/// Produces `per_day` evenly spaced readings for each of `days` consecutive
/// days starting at 2024-01-01, with a sinusoidal daily cycle per field
/// plus random jitter.
///
/// # Arguments
/// * `schema` - Column configuration the readings should match
/// * `days` - Number of consecutive days to generate
/// * `per_day` - Number of readings per day
///
/// # Returns
/// * `Vec<Reading>` - Generated readings in timestamp order
pub fn generate_readings(schema: &TableSchema, days: usize, per_day: usize) -> Vec<Reading> {
    use rand::{thread_rng, Rng};

    let mut random = thread_rng();
    let mut rows = Vec::with_capacity(days * per_day);

    let base_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let step_seconds = 86_400 / per_day.max(1) as i64;

    for day in 0..days {
        let date = base_date + Days::new(day as u64);

        for slot in 0..per_day {
            let timestamp =
                date.and_time(NaiveTime::MIN) + Duration::seconds(slot as i64 * step_seconds);

            // Peak mid-afternoon, trough before dawn
            let phase = slot as f64 / per_day as f64 * std::f64::consts::TAU;
            let daily_swing = 4.0 * (phase - std::f64::consts::FRAC_PI_2).sin();

            let values = (0..schema.field_count())
                .map(|field| {
                    let baseline = 20.0 + 15.0 * field as f64;
                    let jitter = (random.gen::<f64>() - 0.5) * 1.5;
                    Some(baseline + daily_swing + jitter)
                })
                .collect();

            rows.push(Reading::new(timestamp, values));
        }
    }

    rows
}
