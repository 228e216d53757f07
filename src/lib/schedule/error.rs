use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while reshaping schedule records or compiling search filters.
///
/// All of them are deterministic input failures: callers report them, never retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A stored record carries a date or time that does not parse.
    #[error("malformed schedule data in record #{index}: {reason}")]
    MalformedScheduleData { index: usize, reason: String },

    /// A caller-supplied `dateFrom`/`dateTo` value does not parse.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Both bounds parse, but the lower one is after the upper one.
    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}

/// A date or time text that does not follow its fixed format.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextFormatError {
    /// Wrong length, or a digit or separator out of place.
    #[error("expected {expected}")]
    Shape { expected: &'static str },

    /// Right shape, but not a real date or time.
    #[error(transparent)]
    Value(#[from] chrono::ParseError),
}
