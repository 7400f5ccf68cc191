use thiserror::Error;

#[derive(Debug, Error)]
pub enum Nvd3Error {
    /// Teardown only supports flat indices.
    #[error("index cannot be a multi-level index: {0}")]
    UnsupportedIndex(String),
    #[error("data not recognized as a series or table: {0}")]
    UnrecognizedInput(String),
    #[error(
        "axis name must be one of 'xAxis', 'x1Axis', 'x2Axis', 'yAxis', 'y1Axis', 'y2Axis': {0}"
    )]
    InvalidAxisName(String),
    #[error("chart configuration error: {0}")]
    Configuration(String),
    #[error("length mismatch for {context}: index has {expected} entries, values have {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("column '{column}' has unsupported dtype {dtype}")]
    UnsupportedDtype { column: String, dtype: String },
    #[error("index column '{0}' contains null entries")]
    NullIndex(String),
    #[error("dataframe error: {0}")]
    Frame(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Nvd3Error>;
