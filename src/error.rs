//! Error types for conversion, formatting and parsing.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when building, converting, formatting or parsing dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A year, month or ordinal lies outside the supported calendar span.
    #[error("out of range: {what} {value} (supported {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// The day does not exist in the given year and month.
    #[error("invalid date: {year}-{month:02}-{day:02} (month has {max_day} days)")]
    InvalidDate {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// An hour, minute, second or microsecond is out of bounds.
    #[error("invalid time: {field} {value} (max {max})")]
    InvalidTime {
        field: &'static str,
        value: u32,
        max: u32,
    },

    /// The pattern cannot be compiled or used in the requested direction.
    #[error("format error at position {position}: {reason}")]
    Format { position: usize, reason: String },

    /// The input text does not match the pattern.
    #[error("parse error at position {position}: {reason}")]
    Parse { position: usize, reason: String },

    /// A naive value was compared or combined with an aware one.
    #[error("type mismatch: cannot combine naive and timezone-aware date-times")]
    TypeMismatch,
}

impl Error {
    pub(crate) fn out_of_range(what: &'static str, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            what,
            value,
            min,
            max,
        }
    }

    pub(crate) fn parse(position: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            position,
            reason: reason.into(),
        }
    }

    pub(crate) fn format(position: usize, reason: impl Into<String>) -> Self {
        Error::Format {
            position,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = Error::InvalidDate {
            year: 2080,
            month: 1,
            day: 35,
            max_day: 30,
        };
        assert_eq!(
            err.to_string(),
            "invalid date: 2080-01-35 (month has 30 days)"
        );
    }

    #[test]
    fn test_parse_error_carries_position() {
        let err = Error::parse(7, "expected digits");
        assert!(err.to_string().contains("position 7"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<Error>();
    }
}
