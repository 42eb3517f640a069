//! Error types for proximity resolution operations.

use std::io;
use thiserror::Error;

/// Errors that can occur in proximity resolution operations
#[derive(Debug, Error)]
pub enum GeonearError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Result type for proximity resolution operations
pub type GeonearResult<T> = Result<T, GeonearError>;
