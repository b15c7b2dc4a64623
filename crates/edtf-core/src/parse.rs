//! Public parsing entry points.
//!
//! [`parse`] classifies the input and dispatches to the lowest conformance
//! level whose feature set covers it, so the reported level is always
//! minimal. [`parse_with_max_level`] additionally rejects inputs whose
//! minimal level exceeds a caller-imposed cap.
//!
//! Errors come back as a `Vec<ParseError>`: most failures carry a single
//! error, but interval and collection parsing report every bad piece at once.

use crate::classify;
use crate::error::{ErrorCode, ParseError};
use crate::value::Value;
use crate::{level0, level1, level2};

/// Parse an EDTF expression at its minimal conformance level.
///
/// Leading and trailing whitespace is ignored. On success the returned
/// value's `edtf()` text equals the trimmed input.
pub fn parse(text: &str) -> Result<Value, Vec<ParseError>> {
    parse_with_max_level(text, 2)
}

/// Parse an EDTF expression, rejecting features above `max_level`.
///
/// `max_level` is clamped to 2. A cap of 0 accepts only plain calendar
/// dates and date-times; a cap of 1 additionally accepts qualifiers,
/// seasons, simple unspecified digits, extended years, and open or unknown
/// interval endpoints.
pub fn parse_with_max_level(text: &str, max_level: u8) -> Result<Value, Vec<ParseError>> {
    let text = text.trim();
    let max_level = max_level.min(2);
    let level = classify::classify(text).map_err(|e| vec![e])?;

    if level > max_level {
        return Err(vec![over_cap(text, level, max_level)]);
    }
    match level {
        0 => level0::parse(text),
        1 => level1::parse(text),
        _ => level2::parse(text),
    }
}

fn over_cap(text: &str, level: u8, max_level: u8) -> ParseError {
    if level == 2 {
        ParseError::new(
            ErrorCode::NotLevel2,
            format!("'{text}' requires level 2 features but the maximum level is {max_level}"),
        )
    } else {
        ParseError::new(
            ErrorCode::InvalidFormat,
            format!("'{text}' requires level {level} features but the maximum level is {max_level}"),
        )
        .with_suggestion("raise the maximum level or remove qualifiers, seasons, and unspecified digits")
    }
}
