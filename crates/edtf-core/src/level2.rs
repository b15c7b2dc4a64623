//! Level 2 parser.
//!
//! Adds sets and lists with eager range expansion, exponential and
//! significant-digit years, extended seasons 25–41, and per-component
//! (partial/group) qualification with its right-to-left cascade.

use crate::epoch;
use crate::error::{ErrorCode, ParseError};
use crate::level0;
use crate::level1;
use crate::value::{
    Bounds, Collection, CollectionKind, Component, ComponentQualifications, Date, Precision,
    Qualification, Value,
};

/// Parse a level 2 expression.
pub fn parse(text: &str) -> Result<Value, Vec<ParseError>> {
    if text.starts_with('[') {
        return collection(text, CollectionKind::OneOf);
    }
    if text.starts_with('{') {
        return collection(text, CollectionKind::AllOf);
    }
    if text.contains('/') {
        return level0::interval_with(text, single);
    }
    single(text).map_err(|e| vec![e])
}

/// Parse a single level 2 value.
pub(crate) fn single(text: &str) -> Result<Value, ParseError> {
    if has_partial_qualification(text) {
        return partial_qualified(text).map(Value::Date);
    }
    let (qualification, core) = level1::split_trailing_qualifier(text);
    if core.starts_with('Y') && (core.contains('E') || core.contains('S')) {
        let mut d = scientific_year(core)?;
        d.qualification = qualification;
        d.edtf = text.to_string();
        return Ok(Value::Date(d));
    }
    if let Some((year, sig)) = split_significant_year(core) {
        let mut d = significant_year(core, year, sig)?;
        d.qualification = qualification;
        d.edtf = text.to_string();
        return Ok(Value::Date(d));
    }
    // everything else (trailing qualifier, any X pattern, seasons 21-41,
    // extended years, plain ISO) resolves through the lower levels
    level1::single(text)
}

/// Whether qualifiers appear anywhere other than as a single trailing
/// character — the level 2 partial-qualification shapes.
fn has_partial_qualification(text: &str) -> bool {
    let quals: Vec<usize> = text
        .char_indices()
        .filter(|&(_, c)| matches!(c, '?' | '~' | '%'))
        .map(|(i, _)| i)
        .collect();
    match quals.as_slice() {
        [] => false,
        [pos] => *pos != text.len() - 1,
        _ => true,
    }
}

// ── scientific years ────────────────────────────────────────────────────────

/// `Y<base>E<exp>[S<sig>]` and `Y<year>S<sig>`.
fn scientific_year(text: &str) -> Result<Date, ParseError> {
    let body = text.strip_prefix('Y').unwrap_or(text);

    if let Some((base_text, rest)) = body.split_once('E') {
        let (exp_text, sig_text) = match rest.split_once('S') {
            Some((e, s)) => (e, Some(s)),
            None => (rest, None),
        };
        let base: i64 = base_text.parse().map_err(|_| {
            ParseError::new(
                ErrorCode::InvalidExponential,
                format!("invalid exponential year base in '{text}'"),
            )
        })?;
        let exp: u32 = exp_text.parse().map_err(|_| {
            ParseError::new(
                ErrorCode::InvalidExponential,
                format!("invalid exponent in '{text}'"),
            )
        })?;
        let significant = sig_text.map(|s| parse_significant(s, text)).transpose()?;
        let year = 10i64
            .checked_pow(exp)
            .and_then(|scale| base.checked_mul(scale))
            .ok_or_else(|| {
                ParseError::new(
                    ErrorCode::InvalidExponential,
                    format!("exponential year '{text}' is out of range"),
                )
            })?;
        return Ok(year_date(text, year, significant, Some(exp)));
    }

    // Y<year>S<sig>: extended year with significant digits
    let Some((year_text, sig_text)) = body.split_once('S') else {
        return Err(ParseError::new(
            ErrorCode::InvalidExtendedYear,
            format!("malformed extended year '{text}'"),
        ));
    };
    let digit_count = year_text.trim_start_matches('-').len();
    let year_date_value = level1::extended_year(&format!("Y{year_text}"))?;
    let Component::Value(year) = year_date_value.year else {
        return Err(ParseError::new(ErrorCode::InvalidExtendedYear, "unreachable year shape"));
    };
    let significant = parse_significant(sig_text, text)?;
    if significant as usize > digit_count {
        return Err(ParseError::new(
            ErrorCode::InvalidSignificantDigits,
            format!("'{text}' claims more significant digits than the year has"),
        ));
    }
    Ok(year_date(text, year, Some(significant), None))
}

/// Bare `YYYYSn` (optionally negative year).
fn split_significant_year(text: &str) -> Option<(i64, &str)> {
    let (year_text, sig) = text.split_once('S')?;
    let digits = year_text.strip_prefix('-').unwrap_or(year_text);
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if sig.is_empty() || !sig.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year_text.parse().ok().map(|y| (y, sig))
}

fn significant_year(text: &str, year: i64, sig_text: &str) -> Result<Date, ParseError> {
    let significant = parse_significant(sig_text, text)?;
    if significant > 4 {
        return Err(ParseError::new(
            ErrorCode::InvalidSignificantDigits,
            format!("'{text}' claims more significant digits than the year has"),
        ));
    }
    Ok(year_date(text, year, Some(significant), None))
}

fn parse_significant(sig_text: &str, source: &str) -> Result<u32, ParseError> {
    let n: u32 = sig_text.parse().map_err(|_| {
        ParseError::new(
            ErrorCode::InvalidSignificantDigits,
            format!("invalid significant-digit count in '{source}'"),
        )
    })?;
    if n == 0 {
        return Err(ParseError::new(
            ErrorCode::InvalidSignificantDigits,
            format!("significant-digit count must be positive in '{source}'"),
        ));
    }
    Ok(n)
}

/// A year-precision level 2 date. Significant digits and exponent are
/// metadata only — bounds always span the whole resolved year.
fn year_date(text: &str, year: i64, significant: Option<u32>, exponent: Option<u32>) -> Date {
    Date {
        edtf: text.to_string(),
        level: 2,
        precision: Precision::Year,
        year: Component::Value(year),
        month: None,
        day: None,
        qualification: None,
        qualifications: None,
        unspecified: None,
        significant_digits: significant,
        exponent,
        bounds: Bounds::new(epoch::year_min(year), epoch::year_max(year)),
    }
}

// ── partial qualification ───────────────────────────────────────────────────

/// One date component with its surrounding qualifiers.
struct QualifiedToken<'a> {
    before: Option<Qualification>,
    after: Option<Qualification>,
    core: &'a str,
}

/// Parse a date whose components carry individual (`?2004`) or group
/// (`2004?`) qualifiers.
///
/// A qualifier *before* a component governs only that component. A qualifier
/// *after* a component is a group qualifier: it governs that component and
/// every component to its left, overriding individual qualifiers there. The
/// cascade resolves strictly right to left — the rightmost group qualifier
/// wins — and individual qualifiers then fill any component a group left
/// unset.
fn partial_qualified(text: &str) -> Result<Date, ParseError> {
    let (negative, tokens) = tokenize_qualified(text)?;

    let cores: Vec<&str> = tokens.iter().map(|t| t.core).collect();
    let mut core_text = String::new();
    if negative {
        core_text.push('-');
    }
    core_text.push_str(&cores.join("-"));

    let mut date = if core_text.contains('X') {
        level1::unspecified_date(&core_text)?
    } else {
        level0::date(&core_text)?
    };

    let mut quals = ComponentQualifications::default();
    let after = |i: usize| tokens.get(i).and_then(|t| t.after);
    let before = |i: usize| tokens.get(i).and_then(|t| t.before);
    if let Some(q) = after(2) {
        quals.day = Some(q);
        quals.month = Some(q);
        quals.year = Some(q);
    } else if let Some(q) = after(1) {
        quals.month = Some(q);
        quals.year = Some(q);
    } else if let Some(q) = after(0) {
        quals.year = Some(q);
    }
    if quals.year.is_none() {
        quals.year = before(0);
    }
    if quals.month.is_none() {
        quals.month = before(1);
    }
    if quals.day.is_none() {
        quals.day = before(2);
    }

    date.edtf = text.to_string();
    date.level = 2;
    date.qualification = None;
    date.qualifications = Some(quals);
    Ok(date)
}

/// Split a partially qualified date into per-component tokens, pulling off a
/// leading and/or trailing qualifier character from each.
fn tokenize_qualified(text: &str) -> Result<(bool, Vec<QualifiedToken<'_>>), ParseError> {
    let bad = || {
        ParseError::new(
            ErrorCode::InvalidFormat,
            format!("'{text}' is not a valid qualified date"),
        )
        .with_suggestion("qualifiers attach before or after YYYY, MM, or DD components")
    };

    // A leading qualifier may precede the year's sign.
    let (first_qual, rest) = match text.chars().next().and_then(Qualification::from_char) {
        Some(q) => (Some(q), &text[1..]),
        None => (None, text),
    };
    let (negative, body) = match rest.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, rest),
    };

    let raw: Vec<&str> = body.split('-').collect();
    if raw.is_empty() || raw.len() > 3 {
        return Err(bad());
    }

    let mut tokens = Vec::with_capacity(raw.len());
    for (i, part) in raw.iter().enumerate() {
        let mut core = *part;
        let mut before = if i == 0 { first_qual } else { None };
        if i > 0 {
            if let Some(q) = core.chars().next().and_then(Qualification::from_char) {
                before = Some(q);
                core = &core[1..];
            }
        }
        let mut after = None;
        if let Some(q) = core.chars().last().and_then(Qualification::from_char) {
            after = Some(q);
            core = &core[..core.len() - 1];
        }
        let expected = if i == 0 { 4 } else { 2 };
        if core.len() != expected
            || !core.bytes().all(|b| b.is_ascii_digit() || b == b'X')
        {
            return Err(bad());
        }
        tokens.push(QualifiedToken { before, after, core });
    }
    Ok((negative, tokens))
}

// ── sets and lists ──────────────────────────────────────────────────────────

/// Parse `[...]` (one of) or `{...}` (all of).
fn collection(text: &str, kind: CollectionKind) -> Result<Value, Vec<ParseError>> {
    let (open, close) = match kind {
        CollectionKind::OneOf => ('[', ']'),
        CollectionKind::AllOf => ('{', '}'),
    };
    let inner = text
        .strip_prefix(open)
        .and_then(|t| t.strip_suffix(close))
        .ok_or_else(|| {
            vec![ParseError::new(
                ErrorCode::InvalidFormat,
                format!("'{text}' is missing its closing '{close}'"),
            )]
        })?;
    if inner.trim().is_empty() {
        return Err(vec![ParseError::new(
            ErrorCode::EmptySet,
            format!("'{text}' has no members"),
        )]);
    }

    let raw: Vec<&str> = inner.split(',').map(str::trim).collect();
    let last = raw.len() - 1;
    let mut earlier = false;
    let mut later = false;
    let mut members: Vec<Value> = Vec::new();
    let mut errors: Vec<ParseError> = Vec::new();

    for (i, token) in raw.iter().enumerate() {
        let mut token = *token;
        if i == 0 {
            if let Some(rest) = token.strip_prefix("..") {
                earlier = true;
                token = rest;
            }
        }
        if i == last && !earlier_prefix_consumed(token) {
            if let Some(rest) = token.strip_suffix("..") {
                later = true;
                token = rest;
            }
        }
        if token.is_empty() {
            // bare ".." consumed by the earlier/later flags leaves nothing;
            // other empty tokens are malformed
            if !(earlier || later) {
                errors.push(ParseError::new(
                    ErrorCode::InvalidFormat,
                    format!("empty member in '{text}'"),
                ));
            }
            continue;
        }
        if let Some((a, b)) = token.split_once("..") {
            match expand_range(a, b) {
                Ok(expanded) => members.extend(expanded),
                Err(e) => errors.push(e),
            }
        } else {
            match member(token) {
                Ok(v) => members.push(v),
                Err(e) => errors.push(e.context("Invalid set member")),
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    if members.is_empty() {
        return Err(vec![ParseError::new(
            ErrorCode::EmptySet,
            format!("'{text}' has no members"),
        )]);
    }

    let mut min_epoch = if earlier {
        epoch::UNBOUNDED_PAST
    } else {
        epoch::UNBOUNDED_FUTURE
    };
    let mut max_epoch = if later {
        epoch::UNBOUNDED_FUTURE
    } else {
        epoch::UNBOUNDED_PAST
    };
    for m in &members {
        if !earlier {
            min_epoch = min_epoch.min(m.bounds().min_epoch);
        }
        if !later {
            max_epoch = max_epoch.max(m.bounds().max_epoch);
        }
    }

    let c = Collection {
        edtf: text.to_string(),
        level: 2,
        kind,
        members,
        earlier,
        later,
        bounds: Bounds::new(min_epoch, max_epoch),
    };
    Ok(match kind {
        CollectionKind::OneOf => Value::Set(c),
        CollectionKind::AllOf => Value::List(c),
    })
}

/// After stripping a leading `..` the token may itself be empty (input was
/// just `..`); such a token never doubles as a `later` marker.
fn earlier_prefix_consumed(token: &str) -> bool {
    token.is_empty()
}

/// A set/list member: a date or season, possibly qualified or unspecified.
fn member(text: &str) -> Result<Value, ParseError> {
    let value = single(text)?;
    match value {
        Value::Date(_) | Value::Season(_) => Ok(value),
        _ => Err(ParseError::new(
            ErrorCode::InvalidFormat,
            format!("'{text}' cannot be a set member; only dates and seasons can"),
        )),
    }
}

/// Expand `A..B` into discrete members, one per calendar unit, forward from
/// `A` to `B`. Endpoints must be plain dates of the same precision.
fn expand_range(start_text: &str, end_text: &str) -> Result<Vec<Value>, ParseError> {
    let range_err = |detail: String| ParseError::new(ErrorCode::InvalidRange, detail);

    let start = level0::date(start_text)
        .map_err(|e| range_err(format!("invalid range start '{start_text}': {}", e.message)))?;
    let end = level0::date(end_text)
        .map_err(|e| range_err(format!("invalid range end '{end_text}': {}", e.message)))?;

    if start.precision != end.precision {
        return Err(range_err(format!(
            "range endpoints '{start_text}' and '{end_text}' have different precision"
        )));
    }
    if start.bounds.min_epoch > end.bounds.min_epoch {
        return Err(range_err(format!(
            "range '{start_text}..{end_text}' runs backwards"
        )));
    }

    let number = |c: &Option<Component>| match c {
        Some(Component::Value(v)) => *v,
        _ => 0,
    };
    let (mut y, mut m, mut d) = (
        match start.year {
            Component::Value(v) => v,
            Component::Unspecified(_) => 0,
        },
        number(&start.month) as u32,
        number(&start.day) as u32,
    );
    let (end_y, end_m, end_d) = (
        match end.year {
            Component::Value(v) => v,
            Component::Unspecified(_) => 0,
        },
        number(&end.month) as u32,
        number(&end.day) as u32,
    );

    let mut out = Vec::new();
    loop {
        let text = match start.precision {
            Precision::Year => format_year(y),
            Precision::Month => format!("{}-{m:02}", format_year(y)),
            _ => format!("{}-{m:02}-{d:02}", format_year(y)),
        };
        let date = level0::date(&text)
            .map_err(|e| range_err(format!("range member '{text}': {}", e.message)))?;
        out.push(Value::Date(date));

        let done = match start.precision {
            Precision::Year => y == end_y,
            Precision::Month => (y, m) == (end_y, end_m),
            _ => (y, m, d) == (end_y, end_m, end_d),
        };
        if done {
            break;
        }
        match start.precision {
            Precision::Year => y += 1,
            Precision::Month => {
                m += 1;
                if m > 12 {
                    m = 1;
                    y += 1;
                }
            }
            _ => {
                d += 1;
                if d > epoch::days_in_month(y, m) {
                    d = 1;
                    m += 1;
                    if m > 12 {
                        m = 1;
                        y += 1;
                    }
                }
            }
        }
    }
    Ok(out)
}

fn format_year(y: i64) -> String {
    if y < 0 {
        format!("-{:04}", -y)
    } else {
        format!("{y:04}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Unspecified;

    fn date(text: &str) -> Date {
        match single(text).unwrap() {
            Value::Date(d) => d,
            other => panic!("expected date, got {other:?}"),
        }
    }

    fn set(text: &str) -> Collection {
        match parse(text).unwrap() {
            Value::Set(c) | Value::List(c) => c,
            other => panic!("expected collection, got {other:?}"),
        }
    }

    // ── sets and lists ──────────────────────────────────────────────────

    #[test]
    fn test_set_with_range_expands_members() {
        let c = set("[1667,1668,1670..1672]");
        assert_eq!(c.level, 2);
        assert_eq!(c.kind, CollectionKind::OneOf);
        let years: Vec<&str> = c.members.iter().map(Value::edtf).collect();
        assert_eq!(years, ["1667", "1668", "1670", "1671", "1672"]);
        assert_eq!(c.bounds.min_epoch, epoch::year_min(1667));
        assert_eq!(c.bounds.max_epoch, epoch::year_max(1672));
    }

    #[test]
    fn test_list_kind_is_metadata_only() {
        let s = parse("[1667,1668]").unwrap();
        let l = parse("{1667,1668}").unwrap();
        assert!(matches!(s, Value::Set(_)));
        assert!(matches!(l, Value::List(_)));
        assert_eq!(s.bounds(), l.bounds());
    }

    #[test]
    fn test_earlier_and_later_flags() {
        let c = set("[..1760-12-03]");
        assert!(c.earlier);
        assert!(!c.later);
        assert_eq!(c.bounds.min_epoch, epoch::UNBOUNDED_PAST);
        assert_eq!(c.bounds.max_epoch, epoch::day_max(1760, 12, 3));

        let c = set("[1760-12..]");
        assert!(c.later);
        assert_eq!(c.bounds.min_epoch, epoch::month_min(1760, 12));
        assert_eq!(c.bounds.max_epoch, epoch::UNBOUNDED_FUTURE);
    }

    #[test]
    fn test_month_range_rolls_over_year() {
        let c = set("[2019-11..2020-02]");
        let months: Vec<&str> = c.members.iter().map(Value::edtf).collect();
        assert_eq!(months, ["2019-11", "2019-12", "2020-01", "2020-02"]);
    }

    #[test]
    fn test_day_range_is_leap_aware() {
        let c = set("[2004-02-27..2004-03-01]");
        let days: Vec<&str> = c.members.iter().map(Value::edtf).collect();
        assert_eq!(days, ["2004-02-27", "2004-02-28", "2004-02-29", "2004-03-01"]);
    }

    #[test]
    fn test_set_members_can_be_seasons_and_qualified() {
        let c = set("[1984?,2004-21]");
        assert!(matches!(c.members[0], Value::Date(_)));
        assert!(matches!(c.members[1], Value::Season(_)));
    }

    #[test]
    fn test_empty_set_rejected() {
        let errs = parse("[]").unwrap_err();
        assert_eq!(errs[0].code, ErrorCode::EmptySet);
        let errs = parse("{}").unwrap_err();
        assert_eq!(errs[0].code, ErrorCode::EmptySet);
    }

    #[test]
    fn test_range_precision_mismatch_rejected() {
        let errs = parse("[1670..1672-06]").unwrap_err();
        assert_eq!(errs[0].code, ErrorCode::InvalidRange);
    }

    #[test]
    fn test_backwards_range_rejected() {
        let errs = parse("[1672..1670]").unwrap_err();
        assert_eq!(errs[0].code, ErrorCode::InvalidRange);
    }

    // ── scientific years ────────────────────────────────────────────────

    #[test]
    fn test_exponential_year() {
        let d = date("Y17E7");
        assert_eq!(d.level, 2);
        assert_eq!(d.year, Component::Value(170_000_000));
        assert_eq!(d.exponent, Some(7));
        assert_eq!(d.significant_digits, None);
        assert_eq!(d.bounds.min_epoch, epoch::year_min(170_000_000));
    }

    #[test]
    fn test_exponential_year_with_significant_digits() {
        let d = date("Y3388E2S3");
        assert_eq!(d.year, Component::Value(338_800));
        assert_eq!(d.exponent, Some(2));
        assert_eq!(d.significant_digits, Some(3));
    }

    #[test]
    fn test_extended_year_with_significant_digits() {
        let d = date("Y171010000S3");
        assert_eq!(d.year, Component::Value(171_010_000));
        assert_eq!(d.significant_digits, Some(3));
        assert_eq!(d.exponent, None);
    }

    #[test]
    fn test_bare_year_with_significant_digits() {
        let d = date("1950S2");
        assert_eq!(d.level, 2);
        assert_eq!(d.year, Component::Value(1950));
        assert_eq!(d.significant_digits, Some(2));
        // metadata only: bounds still span the whole year
        assert_eq!(d.bounds.min_epoch, epoch::year_min(1950));
        assert_eq!(d.bounds.max_epoch, epoch::year_max(1950));
    }

    #[test]
    fn test_exponential_overflow_rejected() {
        let err = single("Y9E19").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidExponential);
    }

    #[test]
    fn test_significant_digits_exceeding_year_rejected() {
        let err = single("1950S5").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSignificantDigits);
        let err = single("Y171010000S12").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSignificantDigits);
    }

    // ── partial qualification ───────────────────────────────────────────

    #[test]
    fn test_individual_qualifiers_govern_their_components() {
        // ?2004-06-~11: year uncertain, day approximate, month untouched
        let d = date("?2004-06-~11");
        assert_eq!(d.level, 2);
        assert!(d.qualification.is_none());
        let q = d.qualifications.unwrap();
        assert!(q.year.is_some_and(|q| q.uncertain && !q.approximate));
        assert!(q.month.is_none());
        assert!(q.day.is_some_and(|q| q.approximate && !q.uncertain));
    }

    #[test]
    fn test_group_qualifier_governs_leftward() {
        // 2004-06%-11: group on month covers month and year, not day
        let d = date("2004-06%-11");
        let q = d.qualifications.unwrap();
        assert!(q.year.is_some_and(|q| q.uncertain && q.approximate));
        assert!(q.month.is_some_and(|q| q.uncertain && q.approximate));
        assert!(q.day.is_none());
    }

    #[test]
    fn test_year_group_governs_year_only() {
        let d = date("2004?-06-11");
        let q = d.qualifications.unwrap();
        assert!(q.year.is_some_and(|q| q.uncertain));
        assert!(q.month.is_none());
        assert!(q.day.is_none());
    }

    #[test]
    fn test_group_overrides_individual() {
        // ~2004-06-11?: day group sets all three, overriding the year's ~
        let d = date("~2004-06-11?");
        let q = d.qualifications.unwrap();
        assert!(q.year.is_some_and(|q| q.uncertain && !q.approximate));
        assert!(q.month.is_some_and(|q| q.uncertain));
        assert!(q.day.is_some_and(|q| q.uncertain));
    }

    #[test]
    fn test_leading_qualifier_on_lone_year() {
        let d = date("?2004");
        assert_eq!(d.level, 2);
        let q = d.qualifications.unwrap();
        assert!(q.year.is_some_and(|q| q.uncertain));
    }

    #[test]
    fn test_qualified_date_keeps_bounds_and_unspecified() {
        let d = date("?201X-06");
        assert_eq!(d.bounds.min_epoch, epoch::month_min(2010, 6));
        assert_eq!(d.bounds.max_epoch, epoch::month_max(2019, 6));
        assert_eq!(d.unspecified, Some(Unspecified { year: true, month: false, day: false }));
    }

    #[test]
    fn test_round_trip_text() {
        for s in [
            "[1667,1668,1670..1672]",
            "{1960,1961-12}",
            "[..1760-12-03]",
            "?2004-06-~11",
            "2004?-06-11",
            "Y17E7",
            "1950S2",
            "2001-33",
        ] {
            assert_eq!(parse(s).unwrap().edtf(), s);
        }
    }

    #[test]
    fn test_extended_season_spans() {
        let q1 = parse("2001-33").unwrap();
        assert_eq!(q1.bounds().min_epoch, epoch::month_min(2001, 1));
        assert_eq!(q1.bounds().max_epoch, epoch::month_max(2001, 3));

        let sem2 = parse("2001-41").unwrap();
        assert_eq!(sem2.bounds().min_epoch, epoch::month_min(2001, 7));
        assert_eq!(sem2.bounds().max_epoch, epoch::month_max(2001, 12));

        // southern seasons shift by two quarters: spring is Sep-Nov and
        // summer rolls into the next year
        let southern_spring = parse("2001-29").unwrap();
        assert_eq!(southern_spring.bounds().min_epoch, epoch::month_min(2001, 9));
        assert_eq!(southern_spring.bounds().max_epoch, epoch::month_max(2001, 11));

        let southern_summer = parse("2001-30").unwrap();
        assert_eq!(southern_summer.bounds().min_epoch, epoch::month_min(2001, 12));
        assert_eq!(southern_summer.bounds().max_epoch, epoch::month_max(2002, 2));
    }
}
