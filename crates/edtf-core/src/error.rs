//! Error types for EDTF parsing.
//!
//! Parsing never panics and never throws: every failure is reported as one or
//! more [`ParseError`] values carrying a stable [`ErrorCode`], a human-readable
//! message, and optionally a suggestion and a byte position in the input.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Stable machine-readable error codes for EDTF parse failures.
///
/// Codes render in `SCREAMING_SNAKE_CASE` (e.g. `INVALID_MONTH`) so callers
/// can match on them without caring about message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidFormat,
    InvalidMonth,
    InvalidDay,
    InvalidHour,
    InvalidMinute,
    InvalidSecond,
    InvalidInterval,
    InvalidIntervalOrder,
    InvalidSeason,
    InvalidRange,
    EmptySet,
    InvalidExponential,
    InvalidExtendedYear,
    InvalidSignificantDigits,
    NotLevel2,
}

impl ErrorCode {
    /// The stable textual form of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidMonth => "INVALID_MONTH",
            ErrorCode::InvalidDay => "INVALID_DAY",
            ErrorCode::InvalidHour => "INVALID_HOUR",
            ErrorCode::InvalidMinute => "INVALID_MINUTE",
            ErrorCode::InvalidSecond => "INVALID_SECOND",
            ErrorCode::InvalidInterval => "INVALID_INTERVAL",
            ErrorCode::InvalidIntervalOrder => "INVALID_INTERVAL_ORDER",
            ErrorCode::InvalidSeason => "INVALID_SEASON",
            ErrorCode::InvalidRange => "INVALID_RANGE",
            ErrorCode::EmptySet => "EMPTY_SET",
            ErrorCode::InvalidExponential => "INVALID_EXPONENTIAL",
            ErrorCode::InvalidExtendedYear => "INVALID_EXTENDED_YEAR",
            ErrorCode::InvalidSignificantDigits => "INVALID_SIGNIFICANT_DIGITS",
            ErrorCode::NotLevel2 => "NOT_LEVEL_2",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single EDTF parse failure.
///
/// Failures accumulate as an ordered list (`Vec<ParseError>`); a failed parse
/// never yields a partial value. Nested failures (e.g. an invalid interval
/// endpoint) keep the inner error's code and prefix its message with context.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{code}: {message}")]
pub struct ParseError {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable description of what went wrong.
    pub message: String,
    /// Optional hint for fixing the input.
    pub suggestion: Option<String>,
    /// Byte offset into the (trimmed) input where the problem was found.
    pub position: Option<usize>,
}

impl ParseError {
    /// Build an error with just a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ParseError {
            code,
            message: message.into(),
            suggestion: None,
            position: None,
        }
    }

    /// Attach a fix-it suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach the byte position where the problem was found.
    #[must_use]
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Wrap a nested failure with a contextual prefix, keeping its code.
    ///
    /// Used when a sub-parse fails inside a larger structure, e.g.
    /// `"Invalid interval start: INVALID_MONTH: …"`.
    #[must_use]
    pub fn context(mut self, prefix: &str) -> Self {
        self.message = format!("{prefix}: {}", self.message);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display_is_screaming_snake() {
        assert_eq!(ErrorCode::InvalidIntervalOrder.to_string(), "INVALID_INTERVAL_ORDER");
        assert_eq!(ErrorCode::EmptySet.to_string(), "EMPTY_SET");
        assert_eq!(ErrorCode::NotLevel2.to_string(), "NOT_LEVEL_2");
    }

    #[test]
    fn test_error_display_includes_code_and_message() {
        let err = ParseError::new(ErrorCode::InvalidMonth, "month 13 out of range");
        assert_eq!(err.to_string(), "INVALID_MONTH: month 13 out of range");
    }

    #[test]
    fn test_context_prefixes_message_and_keeps_code() {
        let err = ParseError::new(ErrorCode::InvalidDay, "day 31 out of range for 1985-02")
            .context("Invalid interval start");
        assert_eq!(err.code, ErrorCode::InvalidDay);
        assert!(err.message.starts_with("Invalid interval start: "));
    }

    #[test]
    fn test_builders_attach_metadata() {
        let err = ParseError::new(ErrorCode::InvalidFormat, "unrecognized input")
            .with_suggestion("use YYYY, YYYY-MM, or YYYY-MM-DD")
            .at(3);
        assert_eq!(err.suggestion.as_deref(), Some("use YYYY, YYYY-MM, or YYYY-MM-DD"));
        assert_eq!(err.position, Some(3));
    }
}
