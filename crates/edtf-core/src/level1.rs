//! Level 1 parser.
//!
//! Adds to the ISO profile: a single trailing whole-value qualifier
//! (`?` uncertain, `~` approximate, `%` both), unspecified `X` digits at
//! digit boundaries, `Y`-prefixed extended years, seasons 21–24, and interval
//! endpoints that are *open* (`..`, unbounded) or *unknown* (empty, unstated).

use crate::classify;
use crate::epoch;
use crate::error::{ErrorCode, ParseError};
use crate::level0;
use crate::value::{
    season_span, Bounds, Component, Date, Precision, Qualification, Season, Unspecified, Value,
};

/// Parse a level 1 expression.
pub fn parse(text: &str) -> Result<Value, Vec<ParseError>> {
    if text.contains('/') {
        level0::interval_with(text, single)
    } else {
        single(text).map_err(|e| vec![e])
    }
}

/// Parse a single level 1 value: a date, season, or datetime, with an
/// optional trailing whole-value qualifier.
pub(crate) fn single(text: &str) -> Result<Value, ParseError> {
    let (qualification, core) = split_trailing_qualifier(text);
    let mut value = unqualified(core)?;

    if let Some(q) = qualification {
        match &mut value {
            Value::Date(d) => {
                d.qualification = Some(q);
                d.level = d.level.max(1);
                d.edtf = text.to_string();
            }
            Value::Season(s) => {
                s.qualification = Some(q);
                s.level = s.level.max(1);
                s.edtf = text.to_string();
            }
            _ => {
                return Err(ParseError::new(
                    ErrorCode::InvalidFormat,
                    format!("'{text}': only dates and seasons take a qualifier"),
                ));
            }
        }
    }
    Ok(value)
}

/// Parse the qualifier-free body of a level 1 value.
fn unqualified(text: &str) -> Result<Value, ParseError> {
    if text.starts_with('Y') {
        return extended_year(text).map(Value::Date);
    }
    if let Some(code) = classify::season_code(text) {
        return season(text, code).map(Value::Season);
    }
    if text.contains('X') {
        return unspecified_date(text).map(Value::Date);
    }
    level0::single(text)
}

/// Split off a single trailing qualifier character, if present.
pub(crate) fn split_trailing_qualifier(text: &str) -> (Option<Qualification>, &str) {
    match text.chars().last().and_then(Qualification::from_char) {
        Some(q) => (Some(q), &text[..text.len() - 1]),
        None => (None, text),
    }
}

/// Parse `Y<year>`: a signed year of five or more digits.
pub(crate) fn extended_year(text: &str) -> Result<Date, ParseError> {
    let body = text.strip_prefix('Y').unwrap_or(text);
    let (negative, digits) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    if digits.len() < 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(
            ErrorCode::InvalidExtendedYear,
            format!("'{text}' is not a valid extended year"),
        )
        .with_suggestion("Y years need at least five digits; use a plain 4-digit year otherwise"));
    }
    let magnitude: i64 = digits.parse().map_err(|_| {
        ParseError::new(
            ErrorCode::InvalidExtendedYear,
            format!("extended year '{text}' is out of range"),
        )
    })?;
    let year = if negative { -magnitude } else { magnitude };

    Ok(Date {
        edtf: text.to_string(),
        level: 1,
        precision: Precision::Year,
        year: Component::Value(year),
        month: None,
        day: None,
        qualification: None,
        qualifications: None,
        unspecified: None,
        significant_digits: None,
        exponent: None,
        bounds: Bounds::new(epoch::year_min(year), epoch::year_max(year)),
    })
}

/// Parse `YYYY-NN` with a season code 21–41 into a [`Season`] whose bounds
/// cover the code's fixed month span.
pub(crate) fn season(text: &str, code: u8) -> Result<Season, ParseError> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (year_text, _) = body.split_once('-').ok_or_else(|| {
        ParseError::new(ErrorCode::InvalidSeason, format!("malformed season '{text}'"))
    })?;
    let year_abs: i64 = year_text.parse().map_err(|_| {
        ParseError::new(ErrorCode::InvalidSeason, format!("invalid season year in '{text}'"))
    })?;
    let year = if negative { -year_abs } else { year_abs };

    let (start_month, end_month, end_offset) = season_span(code).ok_or_else(|| {
        ParseError::new(
            ErrorCode::InvalidSeason,
            format!("season code {code} is out of range 21-41"),
        )
    })?;

    Ok(Season {
        edtf: text.to_string(),
        level: if code >= 25 { 2 } else { 1 },
        year,
        code,
        qualification: None,
        bounds: Bounds::new(
            epoch::month_min(year, start_month),
            epoch::month_max(year + end_offset, end_month),
        ),
    })
}

/// Resolved `[lo, hi]` numeric range for one date component pattern.
struct Widened {
    component: Component,
    lo: i64,
    hi: i64,
    has_x: bool,
}

fn widen(pattern: &str) -> Result<Widened, ParseError> {
    if pattern.bytes().all(|b| b.is_ascii_digit()) {
        let v: i64 = pattern.parse().map_err(|_| {
            ParseError::new(ErrorCode::InvalidFormat, format!("invalid component '{pattern}'"))
        })?;
        return Ok(Widened { component: Component::Value(v), lo: v, hi: v, has_x: false });
    }
    let lo: i64 = pattern.replace('X', "0").parse().map_err(|_| {
        ParseError::new(ErrorCode::InvalidFormat, format!("invalid component '{pattern}'"))
    })?;
    let hi: i64 = pattern.replace('X', "9").parse().map_err(|_| {
        ParseError::new(ErrorCode::InvalidFormat, format!("invalid component '{pattern}'"))
    })?;
    Ok(Widened {
        component: Component::Unspecified(pattern.to_string()),
        lo,
        hi,
        has_x: true,
    })
}

/// Most days the month can hold under any realization of a widened year.
/// Leap years recur within any 8-year window, so the scan is bounded.
fn widest_day_cap(year_lo: i64, year_hi: i64, month: u32) -> i64 {
    (year_lo..=year_hi.min(year_lo + 8))
        .map(|y| i64::from(epoch::days_in_month(y, month)))
        .max()
        .unwrap_or(0)
}

/// Parse a date containing unspecified (`X`) digits, widening each pattern to
/// its `[min, max]` bound: digits to `0` for the minimum, to `9` for the
/// maximum, clamped to the calendar (month to 12, day to the most days any
/// realization of the year and month allows).
///
/// Handles every `X` shape; the resulting `level` distinguishes digit-boundary
/// patterns (1) from mixed ones (2). Shared with the level 2 parser.
pub(crate) fn unspecified_date(text: &str) -> Result<Date, ParseError> {
    let (negative, parts) = classify::split_date_components(text).ok_or_else(|| {
        ParseError::new(
            ErrorCode::InvalidFormat,
            format!("'{text}' is not a valid date pattern"),
        )
        .with_suggestion("X digits fit the YYYY, YYYY-MM, or YYYY-MM-DD shape")
    })?;
    let level = classify::unspecified_level(text)?;

    let year = widen(parts[0])?;
    // Negative years widen on magnitude, so the minimum is the more negative
    // bound.
    let (year_lo, year_hi, year_component) = if negative {
        let component = match year.component {
            Component::Value(v) => Component::Value(-v),
            pattern @ Component::Unspecified(_) => pattern,
        };
        (-year.hi, -year.lo, component)
    } else {
        (year.lo, year.hi, year.component)
    };

    let month = parts.get(1).map(|p| widen(p)).transpose()?;
    let (month_lo, month_hi) = match &month {
        None => (1, 12),
        Some(m) if !m.has_x => {
            if !(1..=12).contains(&m.lo) {
                return Err(ParseError::new(
                    ErrorCode::InvalidMonth,
                    format!("month {} out of range in '{text}'", m.lo),
                ));
            }
            (m.lo, m.hi)
        }
        Some(m) => {
            let lo = m.lo.max(1);
            let hi = m.hi.min(12);
            if lo > 12 {
                return Err(ParseError::new(
                    ErrorCode::InvalidMonth,
                    format!("month pattern in '{text}' cannot resolve below 13"),
                ));
            }
            (lo, hi)
        }
    };

    let day = parts.get(2).map(|p| widen(p)).transpose()?;
    let (day_lo, day_hi) = match &day {
        None => (1, 1), // unused at year/month precision
        Some(d) => {
            // cap by the most permissive realization: a widened year can
            // still reach Feb 29, a widened month can still reach day 31
            let cap = if month.as_ref().is_some_and(|m| !m.has_x) {
                widest_day_cap(year_lo, year_hi, month_lo as u32)
            } else {
                31
            };
            let lo = if d.has_x { d.lo.max(1) } else { d.lo };
            if lo < 1 || lo > cap {
                return Err(ParseError::new(
                    ErrorCode::InvalidDay,
                    format!("day {} out of range in '{text}'", d.lo),
                ));
            }
            (lo, d.hi.min(cap).max(lo))
        }
    };

    let (precision, min_epoch, max_epoch) = match (&month, &day) {
        (None, _) => (
            Precision::Year,
            epoch::year_min(year_lo),
            epoch::year_max(year_hi),
        ),
        (Some(_), None) => (
            Precision::Month,
            epoch::month_min(year_lo, month_lo as u32),
            epoch::month_max(year_hi, month_hi as u32),
        ),
        (Some(_), Some(_)) => {
            let m_lo = month_lo as u32;
            let m_hi = month_hi as u32;
            // a fixed day may not exist in every widened year (Feb 29), so
            // the bound years scan for the first and last realization
            let min_year = (year_lo..=year_hi.min(year_lo + 8))
                .find(|&y| day_lo <= i64::from(epoch::days_in_month(y, m_lo)))
                .unwrap_or(year_lo);
            let max_year = ((year_hi - 8).max(year_lo)..=year_hi)
                .rev()
                .find(|&y| day_lo <= i64::from(epoch::days_in_month(y, m_hi)))
                .unwrap_or(year_hi);
            let min_day = day_lo.min(i64::from(epoch::days_in_month(min_year, m_lo)));
            let max_day = day_hi.min(i64::from(epoch::days_in_month(max_year, m_hi)));
            (
                Precision::Day,
                epoch::epoch_millis(min_year, m_lo, min_day as u32),
                epoch::day_max(max_year, m_hi, max_day as u32),
            )
        }
    };

    let unspecified = Unspecified {
        year: year_component.is_unspecified(),
        month: month.as_ref().is_some_and(|m| m.has_x),
        day: day.as_ref().is_some_and(|d| d.has_x),
    };

    Ok(Date {
        edtf: text.to_string(),
        level,
        precision,
        year: year_component,
        month: month.map(|m| m.component),
        day: day.map(|d| d.component),
        qualification: None,
        qualifications: None,
        unspecified: Some(unspecified),
        significant_digits: None,
        exponent: None,
        bounds: Bounds::new(min_epoch, max_epoch),
    })
}
