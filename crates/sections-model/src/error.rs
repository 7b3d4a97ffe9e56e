//! Error types for sections-model

/// Result type for sections-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding model documents
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid model pattern {pattern:?}: {message}")]
    InvalidModelPattern { pattern: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidModelPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
