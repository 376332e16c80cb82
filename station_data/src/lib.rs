//! # Station Data
//!
//! `station_data` holds the data layer of the Station Dash project: the
//! column schema for a sensor log, the readings themselves, and the loading
//! utilities that turn a CSV export into an in-memory `ReadingTable`.
//!
//! A station logs a fixed set of numeric quantities (temperature, humidity,
//! pressure, an ultrasound distance proxy, soil moisture) against a
//! timestamp. Which columns exist is configuration, not code: a
//! [`TableSchema`] names the timestamp column and the numeric fields, and
//! every [`Reading`] carries its values positionally aligned with that
//! schema.
//!
//! Timestamps are [`chrono::NaiveDateTime`] on purpose. The station writes
//! local wall-clock times and the reporting timezone is chosen by whoever
//! asks for a report, so normalization happens before data enters this
//! crate.
//!
//! ## Usage Example
//!
//! ```no_run
//! use station_data::TableSchema;
//! use station_data::utils::load_readings;
//!
//! let schema = TableSchema::weather_station();
//! let table = load_readings("station_log.csv", &schema).unwrap();
//!
//! println!(
//!     "{} readings loaded, {} rows skipped",
//!     table.len(),
//!     table.skipped_rows()
//! );
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod utils;

/// Errors that can occur while building or loading reading tables
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Table error: {0}")]
    TableError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Schema config error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Column configuration for a sensor log.
///
/// Names the timestamp column and the ordered list of numeric field
/// columns. Field order matters: [`Reading::values`] is positionally
/// aligned with [`TableSchema::fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    timestamp_column: String,
    fields: Vec<String>,
}

impl TableSchema {
    /// Create a schema from a timestamp column name and field column names.
    ///
    /// # Arguments
    /// * `timestamp_column` - Name of the timestamp column
    /// * `fields` - Names of the numeric field columns, in display order
    ///
    /// # Returns
    /// * `Result<TableSchema, DataError>` - The schema, or an error for an
    ///   empty field list or duplicate field names
    pub fn new(
        timestamp_column: impl Into<String>,
        fields: Vec<String>,
    ) -> Result<Self, DataError> {
        let timestamp_column = timestamp_column.into();
        if timestamp_column.trim().is_empty() {
            return Err(DataError::SchemaError(
                "Timestamp column name must not be empty".to_string(),
            ));
        }
        if fields.is_empty() {
            return Err(DataError::SchemaError(
                "Schema must declare at least one field".to_string(),
            ));
        }
        for (i, field) in fields.iter().enumerate() {
            if field.trim().is_empty() {
                return Err(DataError::SchemaError(format!(
                    "Field name at position {} is empty",
                    i
                )));
            }
            if fields[..i].contains(field) {
                return Err(DataError::SchemaError(format!(
                    "Duplicate field name: {}",
                    field
                )));
            }
        }

        Ok(Self {
            timestamp_column,
            fields,
        })
    }

    /// The column layout the station firmware ships by default.
    pub fn weather_station() -> Self {
        Self {
            timestamp_column: "timestamp".to_string(),
            fields: vec![
                "temperature".to_string(),
                "humidity".to_string(),
                "pressure".to_string(),
                "distance".to_string(),
                "soil_moisture".to_string(),
            ],
        }
    }

    /// Parse a schema from its JSON representation.
    ///
    /// The expected shape matches the serde derive:
    /// `{"timestamp_column": "timestamp", "fields": ["temperature", ...]}`.
    /// The parsed schema goes through the same validation as [`Self::new`].
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let parsed: TableSchema = serde_json::from_str(json)?;
        Self::new(parsed.timestamp_column, parsed.fields)
    }

    /// Name of the timestamp column.
    pub fn timestamp_column(&self) -> &str {
        &self.timestamp_column
    }

    /// Names of the numeric field columns, in schema order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of numeric fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Position of a field by name, if the schema declares it.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field == name)
    }
}

/// One timestamped row of sensor values.
///
/// `values` is aligned with the owning table's schema; `None` marks a field
/// that was missing or non-numeric in the source row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Local wall-clock time of the measurement
    pub timestamp: NaiveDateTime,
    /// Field values in schema order
    pub values: Vec<Option<f64>>,
}

impl Reading {
    /// Create a reading from a timestamp and schema-ordered values.
    pub fn new(timestamp: NaiveDateTime, values: Vec<Option<f64>>) -> Self {
        Self { timestamp, values }
    }

    /// Value of the field at `index`, absent when the field was missing or
    /// the index is out of range.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }
}

/// An ordered, immutable collection of readings plus its schema.
///
/// Row order is the encounter order of the source file and is preserved:
/// downstream selection breaks timestamp ties in favor of the later row.
/// Timestamps need not be unique or sorted. `skipped_rows` reports how many
/// source rows were dropped at load time for unparseable timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingTable {
    schema: TableSchema,
    rows: Vec<Reading>,
    skipped_rows: usize,
}

impl ReadingTable {
    /// Build a table from a schema and rows.
    ///
    /// Every row's value vector must match the schema width.
    pub fn new(schema: TableSchema, rows: Vec<Reading>) -> Result<Self, DataError> {
        Self::with_skipped(schema, rows, 0)
    }

    /// Build a table that also records how many source rows were skipped.
    pub fn with_skipped(
        schema: TableSchema,
        rows: Vec<Reading>,
        skipped_rows: usize,
    ) -> Result<Self, DataError> {
        for (i, row) in rows.iter().enumerate() {
            if row.values.len() != schema.field_count() {
                return Err(DataError::TableError(format!(
                    "Row {} has {} values but the schema declares {} fields",
                    i,
                    row.values.len(),
                    schema.field_count()
                )));
            }
        }

        Ok(Self {
            schema,
            rows,
            skipped_rows,
        })
    }

    /// The table's column schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// All readings in encounter order.
    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    /// Number of source rows dropped at load time.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Number of readings in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no readings at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_schema_rejects_empty_fields() {
        let result = TableSchema::new("timestamp", Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_duplicates() {
        let result = TableSchema::new(
            "timestamp",
            vec!["temperature".to_string(), "temperature".to_string()],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_field_lookup() {
        let schema = TableSchema::weather_station();
        assert_eq!(schema.field_index("pressure"), Some(2));
        assert_eq!(schema.field_index("wind_speed"), None);
        assert_eq!(schema.field_count(), 5);
    }

    #[test]
    fn test_schema_from_json() {
        let schema = TableSchema::from_json(
            r#"{"timestamp_column": "logged_at", "fields": ["temperature", "humidity"]}"#,
        )
        .unwrap();
        assert_eq!(schema.timestamp_column(), "logged_at");
        assert_eq!(schema.field_count(), 2);

        // Validation still applies to deserialized schemas
        let result =
            TableSchema::from_json(r#"{"timestamp_column": "logged_at", "fields": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_rejects_width_mismatch() {
        let schema = TableSchema::weather_station();
        let rows = vec![Reading::new(ts(2024, 1, 1, 10, 0), vec![Some(20.0)])];
        let result = ReadingTable::new(schema, rows);
        assert!(result.is_err());
    }

    #[test]
    fn test_reading_value_accessor() {
        let reading = Reading::new(ts(2024, 1, 1, 10, 0), vec![Some(21.5), None]);
        assert_eq!(reading.value(0), Some(21.5));
        assert_eq!(reading.value(1), None);
        assert_eq!(reading.value(7), None);
    }
}
