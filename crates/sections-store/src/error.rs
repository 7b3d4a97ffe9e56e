//! Error types for sections-store

/// Result type for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a content store backend can surface
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Store query failed: {message}")]
    QueryFailed { message: String },

    #[error("Store backend unavailable: {message}")]
    Unavailable { message: String },
}

impl Error {
    pub fn query(message: impl Into<String>) -> Self {
        Self::QueryFailed {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
