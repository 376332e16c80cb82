//! Time-bucket resampling of one day's readings for charting

use crate::error::{ReportError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use station_data::ReadingTable;
use std::collections::BTreeMap;

/// Aggregate of the readings that fell in one bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketStats {
    /// Number of readings in the bucket
    pub count: usize,
    /// Per-field arithmetic means, absent where the bucket had no numeric
    /// sample for that field
    pub means: Vec<Option<f64>>,
}

/// Bucket averages of a single calendar day, keyed by bucket start.
///
/// Buckets that received no readings are absent from the map; they are
/// never reported as zero or as a neighbor's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketedSeries {
    day: NaiveDate,
    bucket_seconds: i64,
    buckets: BTreeMap<NaiveDateTime, BucketStats>,
}

impl BucketedSeries {
    /// The day the series covers.
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Width of each bucket.
    pub fn bucket_width(&self) -> Duration {
        Duration::seconds(self.bucket_seconds)
    }

    /// Non-empty buckets in chronological order.
    pub fn buckets(&self) -> &BTreeMap<NaiveDateTime, BucketStats> {
        &self.buckets
    }

    /// Stats for the bucket starting at `start`, if it has any readings.
    pub fn get(&self, start: NaiveDateTime) -> Option<&BucketStats> {
        self.buckets.get(&start)
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the day had no readings at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of readings across all buckets.
    pub fn total_count(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.count).sum()
    }
}

/// Average one day's readings into fixed-width time buckets.
///
/// Buckets are half-open `[start, start + width)` intervals anchored at
/// midnight of `day`; a reading exactly on a boundary belongs to the bucket
/// it starts. Means are computed in `f64` with per-field exclusion: an
/// absent field value drops that row from that field's mean only, not from
/// the whole bucket.
///
/// A day with no readings yields an empty series, the charting analogue of
/// an all-absent forecast entry.
///
/// # Arguments
/// * `table` - The reading table, never mutated
/// * `day` - Calendar day to resample
/// * `bucket_width` - Bucket width; must be positive and at most 24 hours
///
/// # Returns
/// * `Result<BucketedSeries, ReportError>` - The series, or
///   `InvalidParameter` for an out-of-range width
pub fn resample_by_bucket(
    table: &ReadingTable,
    day: NaiveDate,
    bucket_width: Duration,
) -> Result<BucketedSeries> {
    let width_seconds = bucket_width.num_seconds();
    if width_seconds <= 0 {
        return Err(ReportError::InvalidParameter(
            "Bucket width must be positive".to_string(),
        ));
    }
    if width_seconds > 86_400 {
        return Err(ReportError::InvalidParameter(
            "Bucket width must not exceed one day".to_string(),
        ));
    }

    let field_count = table.schema().field_count();
    let day_start = day.and_time(NaiveTime::MIN);

    // Per bucket index: row count, per-field sums, per-field sample counts
    let mut slots: BTreeMap<i64, (usize, Vec<f64>, Vec<usize>)> = BTreeMap::new();

    for reading in table.rows() {
        if reading.timestamp.date() != day {
            continue;
        }

        let offset_seconds = (reading.timestamp - day_start).num_seconds();
        let index = offset_seconds / width_seconds;

        let slot = slots
            .entry(index)
            .or_insert_with(|| (0, vec![0.0; field_count], vec![0; field_count]));
        slot.0 += 1;

        for (field, value) in reading.values.iter().enumerate() {
            if let Some(value) = value {
                slot.1[field] += value;
                slot.2[field] += 1;
            }
        }
    }

    let mut buckets = BTreeMap::new();
    for (index, (count, sums, samples)) in slots {
        let start = day_start + Duration::seconds(index * width_seconds);
        let means = sums
            .iter()
            .zip(&samples)
            .map(|(sum, n)| if *n == 0 { None } else { Some(sum / *n as f64) })
            .collect();
        buckets.insert(start, BucketStats { count, means });
    }

    log::debug!(
        "Resampled {} into {} buckets of {}s",
        day,
        buckets.len(),
        width_seconds
    );

    Ok(BucketedSeries {
        day,
        bucket_seconds: width_seconds,
        buckets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use station_data::{Reading, TableSchema};

    #[test]
    fn test_boundary_reading_starts_its_bucket() {
        let schema = TableSchema::new("timestamp", vec!["temperature".to_string()]).unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let table = ReadingTable::new(
            schema,
            vec![Reading::new(
                day.and_hms_opt(3, 0, 0).unwrap(),
                vec![Some(12.0)],
            )],
        )
        .unwrap();

        let series = resample_by_bucket(&table, day, Duration::hours(3)).unwrap();

        // 03:00 opens [03:00, 06:00), it does not close [00:00, 03:00)
        assert!(series.get(day.and_time(NaiveTime::MIN)).is_none());
        let stats = series.get(day.and_hms_opt(3, 0, 0).unwrap()).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.means, vec![Some(12.0)]);
    }
}
