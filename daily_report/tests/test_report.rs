use chrono::{Duration, NaiveDate, NaiveDateTime};
use daily_report::{build_daily_report, ReportError, ReportOptions};
use pretty_assertions::assert_eq;
use station_data::{Reading, ReadingTable, TableSchema};

fn ts(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn temperature_table(rows: &[(NaiveDateTime, f64)]) -> ReadingTable {
    let schema = TableSchema::new("timestamp", vec!["temperature".to_string()]).unwrap();
    let rows = rows
        .iter()
        .map(|(timestamp, value)| Reading::new(*timestamp, vec![Some(*value)]))
        .collect();
    ReadingTable::new(schema, rows).unwrap()
}

#[test]
fn test_report_bundles_all_three_products() {
    let table = temperature_table(&[
        (ts(1, 9), 18.0),
        (ts(1, 15), 23.0),
        (ts(2, 12), 21.0),
        (ts(4, 12), 19.0),
    ]);

    let report = build_daily_report(&table, ts(1, 16), ReportOptions::default()).unwrap();

    let snapshot = report.snapshot.unwrap();
    assert_eq!(snapshot.reading.value(0), Some(23.0));

    assert_eq!(report.forecast.len(), 3);
    assert_eq!(report.forecast[0].values, vec![Some(21.0)]);
    assert!(report.forecast[1].is_absent());
    assert_eq!(report.forecast[2].values, vec![Some(19.0)]);

    // 09:00 and 15:00 land in different 3-hour buckets
    assert_eq!(report.series.len(), 2);
    assert_eq!(report.series.total_count(), 2);
}

#[test]
fn test_report_day_without_data_degrades_gracefully() {
    let table = temperature_table(&[(ts(2, 12), 21.0)]);

    let report = build_daily_report(&table, ts(1, 12), ReportOptions::default()).unwrap();

    // Explicit absence, not a failure and not another day's reading
    assert!(report.snapshot.is_none());
    assert!(report.series.is_empty());
    assert_eq!(report.forecast.len(), 3);
    assert_eq!(report.forecast[0].values, vec![Some(21.0)]);
}

#[test]
fn test_report_propagates_parameter_errors() {
    let table = temperature_table(&[(ts(1, 12), 21.0)]);
    let options = ReportOptions {
        horizon_days: 3,
        bucket_width: Duration::zero(),
    };

    let result = build_daily_report(&table, ts(1, 12), options);

    assert!(matches!(result, Err(ReportError::InvalidParameter(_))));
}

#[test]
fn test_report_serializes_for_the_presentation_layer() {
    let table = temperature_table(&[(ts(1, 9), 18.0), (ts(2, 12), 21.0)]);

    let report = build_daily_report(&table, ts(1, 16), ReportOptions::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"snapshot\""));
    assert!(json.contains("\"forecast\""));
    // Absent values ship as explicit nulls, not omissions
    assert!(json.contains("null"));
}

#[test]
fn test_report_is_idempotent() {
    let table = temperature_table(&[(ts(1, 9), 18.0), (ts(2, 12), 21.0)]);

    let first = build_daily_report(&table, ts(1, 16), ReportOptions::default()).unwrap();
    let second = build_daily_report(&table, ts(1, 16), ReportOptions::default()).unwrap();

    assert_eq!(first.snapshot, second.snapshot);
    assert_eq!(first.forecast, second.forecast);
    assert_eq!(first.series, second.series);
}
