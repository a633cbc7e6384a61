//! Unified error types for the submission client.
//!
//! Submission outcomes are deliberately *not* errors: the controller records
//! remote rejections and transport failures as store state (see
//! [`crate::store::ViewStatus`]). These types cover everything else, i.e. the
//! fallible edges of configuration and persistence.

use thiserror::Error;

/// Unified error type for the submission client.
#[derive(Error, Debug)]
pub enum PfbError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Persistence port error.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// HTTP client construction error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors raised by a session store backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying IO failure while reading or writing a key.
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, PfbError>;
