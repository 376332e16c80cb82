//! Error types for the daily_report crate

use chrono::NaiveDate;
use thiserror::Error;

/// Custom error types for the daily_report crate
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The requested date has no matching readings. Recoverable: the caller
    /// decides how a "no data" state is shown.
    #[error("No readings recorded on {0}")]
    NoDataForDate(NaiveDate),

    /// The table has no readings for any date.
    #[error("Reading table is empty")]
    EmptyTable,

    /// A caller-supplied parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ReportError>;
