//! Error types for input loading, projection and assessment

use thiserror::Error;

/// Failure raised before any projection arithmetic runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A field of the request violates its documented range
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
}

impl ProjectionError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ProjectionError::InvalidInput { field, .. } => field,
        }
    }
}

/// Failure while reading requests or writing reports
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Row numbers are 1-based and exclude the header
    #[error("row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: ProjectionError,
    },

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Failure turning model output into JSON
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model returned no content")]
    Empty,

    #[error("model output is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of the narrative assessment round trip
#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("completion service failed: {0}")]
    Completion(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("assessment JSON has unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}
