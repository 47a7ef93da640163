use thiserror::Error;

/// Failure to decode a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: expected 6 hex digits with an optional leading '#'")]
    InvalidFormat { input: String },
}

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
