//! EstateSearch Error Types
//!
//! Centralized error handling for the library layer.

use thiserror::Error;

/// Central error type for EstateSearch
#[derive(Error, Debug)]
pub enum EstateError {
    #[error("Listing data error: {0}")]
    Data(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for EstateSearch operations
pub type EstateResult<T> = Result<T, EstateError>;
