//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the transaction table
///
/// Every variant is terminal for the session: nothing is rendered
/// from a table that failed to load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Data file is empty or malformed: {0}")]
    EmptyOrMalformed(String),

    #[error("Missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when building or checking filter criteria
#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("Invalid revenue range: min {min} is greater than max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("Revenue bounds must be finite numbers")]
    NonFiniteBound,

    #[error("Region not present in data: {0}")]
    UnknownRegion(String),
}

/// Errors raised by the grouping and reshape engine
#[derive(Error, Debug, PartialEq)]
pub enum GroupingError {
    #[error("Cannot apply {op} to non-numeric column {column}")]
    NonNumericMeasure { column: String, op: String },

    #[error("Column not present in data: {0}")]
    MissingColumn(String),

    #[error("Unknown column in grouped view: {0}")]
    UnknownColumn(String),

    #[error("Row {key} has {found} values, expected {expected}")]
    RowWidth {
        key: String,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while building a render model
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Aggregation failed: {0}")]
    Grouping(#[from] GroupingError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while reading the dashboard configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
