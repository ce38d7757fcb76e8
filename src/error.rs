//! Error types for the schedule extraction library.
//!
//! Row reconstruction itself never fails — noisy or partial lines are filtered,
//! not reported. Errors only arise at the edges: loading fragment dumps and
//! serializing records.

/// Result type alias for schedule extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading fragments or writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fragment dump could not be deserialized
    #[error("Invalid fragment dump: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 decoding error
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
