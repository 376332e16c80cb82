//! # Station Dash
//!
//! Umbrella crate for the Station Dash workspace: a small core that turns a
//! table of timestamped sensor readings into the products a dashboard
//! renders: a "current conditions" snapshot, a fixed-length multi-day
//! forecast panel, and per-day bucket averages for charting.
//!
//! The actual functionality lives in the member crates; this crate just
//! re-exports them under one roof for the demos.
//!
//! ## Example
//!
//! ```
//! use station_dash_workspace::station_data::{ReadingTable, TableSchema};
//! use station_dash_workspace::daily_report::build_forecast;
//! use chrono::NaiveDate;
//!
//! let schema = TableSchema::weather_station();
//! let table = ReadingTable::new(schema, Vec::new()).unwrap();
//! let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//!
//! // An empty table still yields a full-length, all-absent forecast.
//! let forecast = build_forecast(&table, reference, 3);
//! assert_eq!(forecast.len(), 3);
//! ```

pub use daily_report;
pub use station_data;
