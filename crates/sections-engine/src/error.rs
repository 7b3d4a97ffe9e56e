//! Error types for sections-engine
//!
//! Only configuration handling is fallible at the API surface; resolution
//! itself degrades to null/empty results instead of erroring.

/// Result type for sections-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sections-engine operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
