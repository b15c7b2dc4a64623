//! Level classification: which conformance level an expression requires.
//!
//! Ordered, first-match-wins structural feature detection. Each check is a
//! cheap predicate over the text, not a full parse — validation of actual
//! component values happens in the level parsers. The result is the *minimal*
//! level whose feature set covers the input.
//!
//! Priority order (per feature):
//! 1. set/list brackets → 2
//! 2. qualifier placement — a single trailing qualifier is level 1 (whole-value
//!    qualification); any other placement is level 2 (partial qualification)
//! 3. exponential years and `Y…S…` significant digits → 2
//! 4. bare `YYYYSn` significant digits → 2
//! 5. season codes 25–41 → 2, codes 21–24 → 1
//! 6. unspecified-digit (`X`) patterns — digit-boundary patterns → 1,
//!    any other mixture → 2
//! 7. plain ISO profile → 0, else parse failure
//!
//! An interval takes the max of its endpoints' levels, promoted to 2 when
//! either endpoint carries an unspecified digit.

use crate::error::{ErrorCode, ParseError};

/// Classify a trimmed expression, returning the minimal level (0, 1, or 2)
/// its syntax requires.
pub fn classify(text: &str) -> Result<u8, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new(ErrorCode::InvalidFormat, "empty input")
            .with_suggestion("provide an EDTF expression such as 1985-04-12"));
    }
    if text.starts_with('[') || text.starts_with('{') {
        return Ok(2);
    }
    if text.contains('/') {
        return classify_interval(text);
    }
    classify_single(text)
}

/// Classify a `START/END` interval from its endpoints.
fn classify_interval(text: &str) -> Result<u8, ParseError> {
    let mut parts = text.splitn(2, '/');
    let (start, end) = match (parts.next(), parts.next()) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Err(ParseError::new(
                ErrorCode::InvalidInterval,
                format!("malformed interval '{text}'"),
            ));
        }
    };
    if end.contains('/') {
        return Err(ParseError::new(
            ErrorCode::InvalidInterval,
            format!("interval '{text}' has more than one '/'"),
        ));
    }

    let mut level = 0u8;
    for endpoint in [start, end] {
        if endpoint.is_empty() || endpoint == ".." {
            // unknown / open endpoints are level 1 features
            level = level.max(1);
        } else {
            level = level.max(classify_single(endpoint)?);
        }
    }
    // Any unspecified digit in an endpoint promotes the whole interval to
    // level 2, even when both endpoints individually classify lower.
    if start.contains('X') || end.contains('X') {
        level = 2;
    }
    Ok(level)
}

/// Classify a single (non-interval) expression.
fn classify_single(text: &str) -> Result<u8, ParseError> {
    let quals: Vec<usize> = text
        .char_indices()
        .filter(|&(_, c)| matches!(c, '?' | '~' | '%'))
        .map(|(i, _)| i)
        .collect();

    match quals.as_slice() {
        [] => classify_core(text),
        // A single qualifier at the very end is level 1 whole-value
        // qualification; the remainder classifies on its own.
        [pos] if *pos == text.len() - 1 => {
            let inner = classify_core(&text[..*pos])?;
            Ok(inner.max(1))
        }
        // Leading, interior, or multiple qualifiers: level 2 partial
        // qualification.
        _ => Ok(2),
    }
}

/// Classify an expression with qualifiers already accounted for.
fn classify_core(text: &str) -> Result<u8, ParseError> {
    if let Some(rest) = text.strip_prefix('Y') {
        if rest.is_empty() {
            return Err(format_error(text));
        }
        if rest.contains('E') || rest.contains('S') {
            return Ok(2);
        }
        return Ok(1);
    }
    if let Some(code) = season_code(text) {
        return Ok(if code >= 25 { 2 } else { 1 });
    }
    if is_year_with_significant_digits(text) {
        return Ok(2);
    }
    if text.contains('X') {
        return unspecified_level(text);
    }
    if is_level0_shape(text) {
        return Ok(0);
    }
    Err(format_error(text))
}

fn format_error(text: &str) -> ParseError {
    ParseError::new(
        ErrorCode::InvalidFormat,
        format!("unrecognized EDTF expression '{text}'"),
    )
    .with_suggestion("expected forms like YYYY, YYYY-MM-DD, YYYY-MM-DDTHH:MM:SSZ, or START/END")
}

/// Extract a season code from `YYYY-NN` where NN is 21–41 (sign allowed on
/// the year). Returns `None` when the text is not season-shaped.
pub(crate) fn season_code(text: &str) -> Option<u8> {
    let body = text.strip_prefix('-').unwrap_or(text);
    let (year, code) = body.split_once('-')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u8 = code.parse().ok()?;
    (21..=41).contains(&n).then_some(n)
}

/// `YYYYSn`: a bare 4-digit year with a significant-digit count.
fn is_year_with_significant_digits(text: &str) -> bool {
    let Some((year, sig)) = text.split_once('S') else {
        return false;
    };
    let year = year.strip_prefix('-').unwrap_or(year);
    year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && !sig.is_empty()
        && sig.bytes().all(|b| b.is_ascii_digit())
}

/// Decide level 1 vs 2 for an expression containing `X` digits.
///
/// Level 1 covers digit-boundary patterns only: a year whose `X`s form a
/// contiguous right-aligned run (`201X`, `20XX`, `XXXX`), a fully specified
/// year with a fully unspecified month and/or day, or year and month both
/// fully unspecified. Every other mixture is level 2.
pub(crate) fn unspecified_level(text: &str) -> Result<u8, ParseError> {
    let (_, parts) = split_date_components(text).ok_or_else(|| format_error(text))?;
    let year = parts[0];
    let month = parts.get(1).copied();
    let day = parts.get(2).copied();

    let year_full = all_digits(year);
    let year_all_x = year.bytes().all(|b| b == b'X');
    let year_suffix_x = is_right_aligned_x(year);

    let level = match (month, day) {
        (None, _) => {
            if year_all_x || year_suffix_x {
                1
            } else {
                2
            }
        }
        (Some(m), d) => {
            let month_all_x = m == "XX";
            let month_full = all_digits(m);
            let day_ok_for_level1 = d.is_none() || d == Some("XX");
            if (year_full && month_all_x && day_ok_for_level1)
                || (year_full && month_full && d == Some("XX"))
                || (year_all_x && month_all_x && day_ok_for_level1)
            {
                1
            } else {
                2
            }
        }
    };
    Ok(level)
}

/// Split `[-]YYYY[-MM[-DD]]`-shaped text (digits or `X` in each slot) into its
/// components. Returns the sign and 1–3 component slices, or `None` when the
/// shape doesn't hold.
pub(crate) fn split_date_components(text: &str) -> Option<(bool, Vec<&str>)> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let parts: Vec<&str> = body.split('-').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }
    if parts[0].len() != 4 || !digits_or_x(parts[0]) {
        return None;
    }
    for p in &parts[1..] {
        if p.len() != 2 || !digits_or_x(p) {
            return None;
        }
    }
    Some((negative, parts))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn digits_or_x(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit() || b == b'X')
}

/// Whether the `X`s in a year pattern form a contiguous run ending at the
/// last digit (`201X`, `20XX`, `XXXX` — but not `2X0X` or `X201`).
fn is_right_aligned_x(year: &str) -> bool {
    let mut seen_x = false;
    for b in year.bytes() {
        match b {
            b'X' => seen_x = true,
            _ if seen_x => return false,
            _ => {}
        }
    }
    seen_x
}

/// Plain ISO profile shape: `[-]YYYY[-MM[-DD]]` or a full datetime.
fn is_level0_shape(text: &str) -> bool {
    if let Some((date, time)) = text.split_once('T') {
        return is_plain_date(date, true) && is_time_shape(time);
    }
    is_plain_date(text, false)
}

fn is_plain_date(text: &str, require_day: bool) -> bool {
    match split_date_components(text) {
        Some((_, parts)) => {
            parts.iter().all(|p| all_digits(p)) && (!require_day || parts.len() == 3)
        }
        None => false,
    }
}

/// `HH:MM:SS` optionally followed by `Z` or `±HH[:MM]`.
fn is_time_shape(text: &str) -> bool {
    let (clock, zone) = match text.find(['Z', '+']) {
        Some(i) => (&text[..i], Some(&text[i..])),
        None => match text.rfind('-') {
            Some(i) => (&text[..i], Some(&text[i..])),
            None => (text, None),
        },
    };
    let clock_ok = clock.len() == 8
        && clock.as_bytes()[2] == b':'
        && clock.as_bytes()[5] == b':'
        && clock
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 2 || i == 5 { b == b':' } else { b.is_ascii_digit() });
    if !clock_ok {
        return false;
    }
    match zone {
        None => true,
        Some("Z") => true,
        Some(z) => {
            let Some(rest) = z.strip_prefix(['+', '-']) else {
                return false;
            };
            match rest.len() {
                2 => all_digits(rest),
                5 => {
                    rest.as_bytes()[2] == b':'
                        && all_digits(&rest[..2])
                        && all_digits(&rest[3..])
                }
                _ => false,
            }
        }
    }
}
