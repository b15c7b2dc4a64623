//! Level 0 parser: the plain ISO 8601 profile.
//!
//! Covers `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, full datetimes with an optional
//! `Z` / `±HH[:MM]` zone, and `START/END` intervals of those. Negative
//! (astronomical) four-digit years are accepted.

use crate::classify;
use crate::epoch;
use crate::error::{ErrorCode, ParseError};
use crate::value::{Bounds, Component, Date, DateTime, Endpoint, Interval, Precision, Value};

/// Parse a level 0 expression.
pub fn parse(text: &str) -> Result<Value, Vec<ParseError>> {
    if text.contains('/') {
        interval_with(text, single)
    } else {
        single(text).map_err(|e| vec![e])
    }
}

/// Parse a single level 0 date or datetime.
pub(crate) fn single(text: &str) -> Result<Value, ParseError> {
    if text.contains('T') {
        datetime(text).map(Value::DateTime)
    } else {
        date(text).map(Value::Date)
    }
}

/// Parse and validate `[-]YYYY[-MM[-DD]]`.
pub(crate) fn date(text: &str) -> Result<Date, ParseError> {
    let (negative, parts) = classify::split_date_components(text)
        .filter(|(_, parts)| parts.iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())))
        .ok_or_else(|| {
            ParseError::new(
                ErrorCode::InvalidFormat,
                format!("'{text}' is not a valid ISO date"),
            )
            .with_suggestion("use YYYY, YYYY-MM, or YYYY-MM-DD")
        })?;

    let base = usize::from(negative);
    let year_abs: i64 = parts[0].parse().map_err(|_| {
        ParseError::new(ErrorCode::InvalidFormat, format!("invalid year in '{text}'"))
    })?;
    let year = if negative { -year_abs } else { year_abs };

    let month: Option<u32> = match parts.get(1) {
        Some(m) => {
            let m: u32 = m
                .parse()
                .map_err(|_| ParseError::new(ErrorCode::InvalidMonth, "invalid month"))?;
            if !(1..=12).contains(&m) {
                return Err(ParseError::new(
                    ErrorCode::InvalidMonth,
                    format!("month {m} out of range in '{text}'"),
                )
                .at(base + 5));
            }
            Some(m)
        }
        None => None,
    };

    let day: Option<u32> = match (parts.get(2), month) {
        (Some(d), Some(m)) => {
            let d: u32 = d
                .parse()
                .map_err(|_| ParseError::new(ErrorCode::InvalidDay, "invalid day"))?;
            let max = epoch::days_in_month(year, m);
            if d < 1 || d > max {
                return Err(ParseError::new(
                    ErrorCode::InvalidDay,
                    format!("day {d} out of range for {year:04}-{m:02}"),
                )
                .at(base + 8));
            }
            Some(d)
        }
        _ => None,
    };

    let (precision, min_epoch, max_epoch) = match (month, day) {
        (None, _) => (Precision::Year, epoch::year_min(year), epoch::year_max(year)),
        (Some(m), None) => (
            Precision::Month,
            epoch::month_min(year, m),
            epoch::month_max(year, m),
        ),
        (Some(m), Some(d)) => (
            Precision::Day,
            epoch::epoch_millis(year, m, d),
            epoch::day_max(year, m, d),
        ),
    };

    Ok(Date {
        edtf: text.to_string(),
        level: 0,
        precision,
        year: Component::Value(year),
        month: month.map(|m| Component::Value(i64::from(m))),
        day: day.map(|d| Component::Value(i64::from(d))),
        qualification: None,
        qualifications: None,
        unspecified: None,
        significant_digits: None,
        exponent: None,
        bounds: Bounds::new(min_epoch, max_epoch),
    })
}

/// Parse and validate a full ISO datetime with optional zone.
pub(crate) fn datetime(text: &str) -> Result<DateTime, ParseError> {
    let Some((date_part, time_part)) = text.split_once('T') else {
        return Err(ParseError::new(
            ErrorCode::InvalidFormat,
            format!("'{text}' is not a datetime"),
        ));
    };

    let d = date(date_part)?;
    if d.precision != Precision::Day {
        return Err(ParseError::new(
            ErrorCode::InvalidFormat,
            format!("datetime '{text}' needs a full YYYY-MM-DD date"),
        )
        .with_suggestion("use YYYY-MM-DDTHH:MM:SS"));
    }
    let (Component::Value(year), Some(Component::Value(month)), Some(Component::Value(day))) =
        (&d.year, &d.month, &d.day)
    else {
        return Err(ParseError::new(ErrorCode::InvalidFormat, "incomplete datetime date"));
    };
    let (year, month, day) = (*year, *month as u32, *day as u32);

    let (clock, zone) = split_zone(time_part);
    let time_base = date_part.len() + 1;

    let clock_parts: Vec<&str> = clock.split(':').collect();
    let [h, m, s] = clock_parts.as_slice() else {
        return Err(ParseError::new(
            ErrorCode::InvalidFormat,
            format!("time '{clock}' must be HH:MM:SS"),
        )
        .at(time_base));
    };
    let hour: u32 = parse_two_digits(h)
        .ok_or_else(|| ParseError::new(ErrorCode::InvalidHour, format!("invalid hour '{h}'")))?;
    let minute: u32 = parse_two_digits(m).ok_or_else(|| {
        ParseError::new(ErrorCode::InvalidMinute, format!("invalid minute '{m}'"))
    })?;
    let second: u32 = parse_two_digits(s).ok_or_else(|| {
        ParseError::new(ErrorCode::InvalidSecond, format!("invalid second '{s}'"))
    })?;
    if hour > 23 {
        return Err(ParseError::new(
            ErrorCode::InvalidHour,
            format!("hour {hour} out of range"),
        )
        .at(time_base));
    }
    if minute > 59 {
        return Err(ParseError::new(
            ErrorCode::InvalidMinute,
            format!("minute {minute} out of range"),
        )
        .at(time_base + 3));
    }
    if second > 59 {
        return Err(ParseError::new(
            ErrorCode::InvalidSecond,
            format!("second {second} out of range"),
        )
        .at(time_base + 6));
    }

    let offset_minutes = match zone {
        None => None,
        Some("Z") => Some(0),
        Some(z) => Some(parse_offset(z)?),
    };

    let local = epoch::epoch_millis_at(year, month, day, hour, minute, second);
    let instant = local - i128::from(offset_minutes.unwrap_or(0)) * epoch::MS_PER_MINUTE;

    Ok(DateTime {
        edtf: text.to_string(),
        year,
        month,
        day,
        hour,
        minute,
        second,
        offset_minutes,
        bounds: Bounds::new(instant, instant),
    })
}

/// Split a time body into clock and optional zone suffix.
fn split_zone(time: &str) -> (&str, Option<&str>) {
    if let Some(i) = time.find(['Z', '+']) {
        return (&time[..i], Some(&time[i..]));
    }
    // a '-' after the clock digits starts a negative offset
    if let Some(i) = time.rfind('-') {
        if i >= 8 {
            return (&time[..i], Some(&time[i..]));
        }
    }
    (time, None)
}

/// Parse `±HH` or `±HH:MM` into signed minutes.
fn parse_offset(zone: &str) -> Result<i32, ParseError> {
    let bad = || {
        ParseError::new(
            ErrorCode::InvalidFormat,
            format!("invalid timezone offset '{zone}'"),
        )
        .with_suggestion("use Z, +HH, or +HH:MM")
    };
    let (sign, rest) = match zone.as_bytes().first() {
        Some(b'+') => (1i32, &zone[1..]),
        Some(b'-') => (-1i32, &zone[1..]),
        _ => return Err(bad()),
    };
    let (hh, mm) = match rest.len() {
        2 => (rest, "00"),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return Err(bad()),
    };
    let hours: i32 = hh.parse().map_err(|_| bad())?;
    let minutes: i32 = mm.parse().map_err(|_| bad())?;
    if hours > 23 || minutes > 59 {
        return Err(bad());
    }
    Ok(sign * (hours * 60 + minutes))
}

fn parse_two_digits(s: &str) -> Option<u32> {
    (s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit()))
        .then(|| s.parse().ok())
        .flatten()
}

/// Assemble a `START/END` interval, parsing each endpoint with
/// `parse_endpoint`. Empty endpoints become *unknown*, `..` becomes *open*;
/// endpoint failures accumulate with contextual prefixes.
///
/// Shared by all three level parsers.
pub(crate) fn interval_with<F>(text: &str, parse_endpoint: F) -> Result<Value, Vec<ParseError>>
where
    F: Fn(&str) -> Result<Value, ParseError>,
{
    let Some((start_text, end_text)) = text.split_once('/') else {
        return Err(vec![ParseError::new(
            ErrorCode::InvalidInterval,
            format!("malformed interval '{text}'"),
        )]);
    };
    if end_text.contains('/') {
        return Err(vec![ParseError::new(
            ErrorCode::InvalidInterval,
            format!("interval '{text}' has more than one '/'"),
        )]);
    }

    let mut errors = Vec::new();
    let start = endpoint(start_text, &parse_endpoint, "Invalid interval start", 0, &mut errors);
    let end = endpoint(
        end_text,
        &parse_endpoint,
        "Invalid interval end",
        start_text.len() + 1,
        &mut errors,
    );
    let (Some(start), Some(end)) = (start, end) else {
        return Err(errors);
    };

    if let (Endpoint::Value(s), Endpoint::Value(e)) = (&start, &end) {
        if s.bounds().min_epoch > e.bounds().max_epoch {
            return Err(vec![ParseError::new(
                ErrorCode::InvalidIntervalOrder,
                format!("interval start '{}' is after its end '{}'", s.edtf(), e.edtf()),
            )]);
        }
    }

    let mut level = 0u8;
    let mut min_epoch = epoch::UNBOUNDED_PAST;
    let mut max_epoch = epoch::UNBOUNDED_FUTURE;
    for (ep, is_start) in [(&start, true), (&end, false)] {
        match ep {
            Endpoint::Value(v) => {
                level = level.max(v.level());
                if has_unspecified(v) {
                    level = 2;
                }
                if is_start {
                    min_epoch = v.bounds().min_epoch;
                } else {
                    max_epoch = v.bounds().max_epoch;
                }
            }
            Endpoint::Open | Endpoint::Unknown => level = level.max(1),
        }
    }

    Ok(Value::Interval(Interval {
        edtf: text.to_string(),
        level,
        start,
        end,
        bounds: Bounds::new(min_epoch, max_epoch),
    }))
}

fn endpoint<F>(
    text: &str,
    parse_endpoint: &F,
    context: &str,
    position: usize,
    errors: &mut Vec<ParseError>,
) -> Option<Endpoint>
where
    F: Fn(&str) -> Result<Value, ParseError>,
{
    match text {
        "" => Some(Endpoint::Unknown),
        ".." => Some(Endpoint::Open),
        _ => match parse_endpoint(text) {
            Ok(v) => Some(Endpoint::Value(Box::new(v))),
            Err(e) => {
                errors.push(e.context(context).at(position));
                None
            }
        },
    }
}

fn has_unspecified(value: &Value) -> bool {
    match value {
        Value::Date(d) => d.unspecified.is_some_and(|u| u.any()),
        _ => false,
    }
}
