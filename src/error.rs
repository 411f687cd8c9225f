//! Unified error types for addmul
//!
//! Uses thiserror for ergonomic error definitions. Argument errors never
//! reach this enum; clap reports them and exits before a request exists.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// IO error (writing the report to stdout)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
