//! Error types for the earnings ticker engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors only surface from configuration loading, schedule validation and the
//! month-level operations that take a raw year/month. The per-tick calculator
//! never returns an error; it reports problems as a work phase instead.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the earnings ticker engine.
///
/// # Example
///
/// ```
/// use earnings_ticker::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A schedule field failed validation.
    #[error("Invalid schedule field '{field}': {message}")]
    InvalidSchedule {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A year/month pair does not name a calendar month.
    #[error("Invalid calendar month {year}-{month:02}")]
    InvalidDate {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },

    /// The holiday feed returned an error response.
    #[error("Holiday feed error (code {code}): {message}")]
    FeedError {
        /// The feed's status code.
        code: i32,
        /// The feed's message.
        message: String,
    },

    /// An exception record contradicts itself.
    #[error("Ambiguous calendar exception on {date}: marked both off and makeup workday")]
    AmbiguousException {
        /// The date of the offending record.
        date: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
