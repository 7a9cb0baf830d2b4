//! Error types for parsing travel date ranges.

use chrono::NaiveDate;
use thiserror::Error;

/// Why a date or a date-range line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text matches none of the accepted date layouts.
    #[error(
        "invalid date format for '{text}'. Supported formats are 'DD MMM YYYY', 'DD Month YYYY' and 'DD/MM/YYYY'"
    )]
    InvalidDateFormat { text: String },

    /// The line is not a single `start - end` pair.
    #[error("expected exactly one '-' between start and end date, found {separators}")]
    MalformedLine { separators: usize },

    /// The start date falls after the end date.
    #[error("start date {start} is after end date {end}")]
    InvalidInterval { start: NaiveDate, end: NaiveDate },
}

/// A [`ParseError`] tied to the input line that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line} ('{text}'): {error}")]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    /// The raw line as it appeared in the input.
    pub text: String,
    pub error: ParseError,
}
