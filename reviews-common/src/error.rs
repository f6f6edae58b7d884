//! Common error types for the review service

use thiserror::Error;

/// Common result type for review service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the review service crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Review data source could not be read or is malformed
    #[error("Data error: {0}")]
    Data(String),
}
