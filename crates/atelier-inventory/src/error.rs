//! Error types for inventory import.

use thiserror::Error;

/// Errors that abort an import as a whole.
///
/// Problems inside a single row never surface here: a cell that cannot be
/// resolved becomes an empty string.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Fewer than two non-blank lines: no header or no data.
    #[error("the CSV file must contain a header row and at least one data row")]
    MissingData,

    /// Required header names not found, in required order.
    #[error("missing required columns in the CSV: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A required request field was absent or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The reader or writer rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rows could not be encoded for output.
    #[error("failed to encode rows: {0}")]
    Encode(String),
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ImportError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ImportError::Encode(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ImportError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ImportError::Encode(err.to_string())
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Encode(err.to_string())
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
