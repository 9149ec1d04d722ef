use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Invalid record {id}: {reason}")]
    Validation { id: String, reason: String },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyticsError {
    pub(crate) fn validation(id: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
