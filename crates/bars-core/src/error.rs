// File: crates/bars-core/src/error.rs
// Summary: Error types for dataset validation, configuration and loading.

use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Reasons a layout cannot be computed. Degenerate input (no labels, no series)
/// is not an error and never produces one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("series '{series}' has {actual} values but there are {expected} labels")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("series '{series}' value at index {index} must be finite and non-negative, got {value}")]
    InvalidValue {
        series: String,
        index: usize,
        value: f64,
    },

    #[error("value axis up to {axis_max} in steps of {step} needs more than {limit} ticks")]
    TooManyTicks {
        axis_max: f64,
        step: f64,
        limit: usize,
    },

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),
}

/// Failures while reading a dataset or config from disk or a string.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv header must start with a label column followed by at least one series column")]
    MissingHeader,

    #[error("row {row}, column '{column}': cannot parse '{raw}' as a number")]
    BadNumber {
        row: usize,
        column: String,
        raw: String,
    },

    #[error("unsupported dataset format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
