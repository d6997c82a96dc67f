//! Crate-level error types.
//!
//! These cover the configuration and export surfaces only. Per-file
//! inspection problems never surface here; they travel as
//! [`FieldStatus`](crate::status::FieldStatus) values inside the records
//! themselves.

use std::io;

use thiserror::Error;

/// Result alias for docaudit operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}
