//! Error types for the serializers.

use thiserror::Error;

/// Errors that can occur while rendering records.
#[derive(Error, Debug)]
pub enum RenderError {
    /// IO error from the CSV writer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output was not valid UTF-8
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
