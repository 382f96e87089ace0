//! Error types for golfstat
//!
//! All errors derive from `thiserror` for convenient error handling and
//! automatic `From` implementations. Only [`GolfstatError::EmptyInput`] is
//! ever surfaced to the user as a fatal condition for an upload; malformed
//! rows are dropped during loading and never become errors.

use thiserror::Error;

/// Main error type for golfstat operations
#[derive(Error, Debug)]
pub enum GolfstatError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input parsed to zero usable shot rows
    #[error("no usable shot rows found in input")]
    EmptyInput,

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
}

/// Convenience type alias for Results in golfstat
pub type Result<T> = std::result::Result<T, GolfstatError>;
