//! # Daily Report
//!
//! A Rust library that turns a table of timestamped sensor readings into
//! the three products a dashboard renders:
//!
//! - A **snapshot**: the most recent reading on the reference date
//! - A **forecast**: one representative reading per day for the next N
//!   calendar days, derived from the same table
//! - A **bucketed series**: per-day time-bucket averages for charting
//!
//! All operations are pure functions over an immutable [`ReadingTable`]
//! and a caller-supplied reference instant. Nothing here touches the
//! clock, caches state, or decides how absence is displayed; days without
//! data come back as explicit errors or absent-valued entries and the
//! presentation layer picks the wording.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_report::{build_daily_report, ReportOptions};
//! use station_data::{ReadingTable, TableSchema};
//! use station_data::utils::generate_readings;
//!
//! // Load data (here: synthetic readings for five days)
//! let schema = TableSchema::weather_station();
//! let rows = generate_readings(&schema, 5, 24);
//! let table = ReadingTable::new(schema, rows).unwrap();
//!
//! // "Now", already normalized to the reporting timezone by the caller
//! let reference = NaiveDate::from_ymd_opt(2024, 1, 2)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! // Snapshot, 3-day forecast and 3-hour chart buckets in one call
//! let report = build_daily_report(&table, reference, ReportOptions::default()).unwrap();
//!
//! assert!(report.snapshot.is_some());
//! assert_eq!(report.forecast.len(), 3);
//! assert!(!report.series.is_empty());
//! ```

pub mod error;
pub mod forecast;
pub mod report;
pub mod resample;
pub mod snapshot;

// Re-export commonly used types
pub use crate::error::{ReportError, Result};
pub use crate::forecast::{build_forecast, ForecastEntry};
pub use crate::report::{build_daily_report, DailyReport, ReportOptions};
pub use crate::resample::{resample_by_bucket, BucketStats, BucketedSeries};
pub use crate::snapshot::{select_daily_snapshot, Snapshot};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
