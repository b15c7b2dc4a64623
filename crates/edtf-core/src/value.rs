//! The EDTF data model.
//!
//! Every successfully parsed expression becomes a [`Value`] — an immutable sum
//! type over dates, datetimes, seasons, intervals, and sets/lists. All
//! variants carry the original text (for round-tripping), the minimal
//! conformance level the syntax requires, a precision, and exact
//! [`Bounds`] in `i128` epoch milliseconds.

use chrono::{DateTime as ChronoDateTime, Utc};
use serde::Serialize;

use crate::epoch;

/// The finest calendar unit an expression pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Year,
    Month,
    Day,
    Second,
}

/// Exact `[min, max]` epoch-millisecond range of a value, plus a best-effort
/// native projection.
///
/// The `i128` fields are always accurate, even for years no native date type
/// can hold. `min`/`max` are the clamped `chrono` projections; `clamped`
/// records whether truncation to `chrono`'s range was necessary for either.
///
/// Invariant: `min_epoch <= max_epoch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_epoch: i128,
    pub max_epoch: i128,
    pub min: ChronoDateTime<Utc>,
    pub max: ChronoDateTime<Utc>,
    pub clamped: bool,
}

impl Bounds {
    /// Build bounds from exact epochs, computing the native projections.
    pub fn new(min_epoch: i128, max_epoch: i128) -> Self {
        debug_assert!(min_epoch <= max_epoch);
        let (min, min_clamped) = epoch::project(min_epoch);
        let (max, max_clamped) = epoch::project(max_epoch);
        Bounds {
            min_epoch,
            max_epoch,
            min,
            max,
            clamped: min_clamped || max_clamped,
        }
    }
}

/// Uncertainty and approximation markers.
///
/// `?` sets `uncertain`, `~` sets `approximate`, `%` sets both. Qualification
/// is metadata only — it never moves bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Qualification {
    pub uncertain: bool,
    pub approximate: bool,
}

impl Qualification {
    /// Map a qualifier character to its flags. Returns `None` for any other
    /// character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '?' => Some(Qualification { uncertain: true, approximate: false }),
            '~' => Some(Qualification { uncertain: false, approximate: true }),
            '%' => Some(Qualification { uncertain: true, approximate: true }),
            _ => None,
        }
    }
}

/// Per-component qualification, level 2 only.
///
/// Never populated together with a whole-value [`Qualification`] — they are
/// different data shapes (level 1 trailing qualifier vs. level 2 partial
/// qualification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ComponentQualifications {
    pub year: Option<Qualification>,
    pub month: Option<Qualification>,
    pub day: Option<Qualification>,
}

impl ComponentQualifications {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// A date component: either a concrete number or a digit pattern containing
/// `X` placeholders (e.g. `"201X"`, `"XX"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Component {
    Value(i64),
    Unspecified(String),
}

impl Component {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, Component::Unspecified(_))
    }
}

/// Which components carry unspecified (`X`) digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Unspecified {
    pub year: bool,
    pub month: bool,
    pub day: bool,
}

impl Unspecified {
    pub fn any(&self) -> bool {
        self.year || self.month || self.day
    }
}

/// A calendar date at year, month, or day precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Date {
    /// Original (trimmed) EDTF text.
    pub edtf: String,
    /// Minimal conformance level this syntax requires.
    pub level: u8,
    pub precision: Precision,
    pub year: Component,
    pub month: Option<Component>,
    pub day: Option<Component>,
    /// Whole-value qualification (level 1 trailing qualifier).
    pub qualification: Option<Qualification>,
    /// Per-component qualification (level 2 partial qualification).
    pub qualifications: Option<ComponentQualifications>,
    /// Which components contain `X` digits.
    pub unspecified: Option<Unspecified>,
    /// Significant-digit count from `S<n>` notation. Metadata only.
    pub significant_digits: Option<u32>,
    /// Exponent from `Y<base>E<exp>` notation. Metadata only — `year` already
    /// holds the multiplied-out value.
    pub exponent: Option<u32>,
    pub bounds: Bounds,
}

/// A fully numeric calendar date and time-of-day, optionally zoned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTime {
    pub edtf: String,
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// UTC offset in minutes (`Z` is 0); `None` for a local (floating) time.
    pub offset_minutes: Option<i32>,
    pub bounds: Bounds,
}

/// A season or sub-year grouping: codes 21–41.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    pub edtf: String,
    pub level: u8,
    pub year: i64,
    /// Season code: 21–24 base seasons, 25–32 hemisphere variants,
    /// 33–36 quarters, 37–39 quadrimesters, 40–41 semesters.
    pub code: u8,
    pub qualification: Option<Qualification>,
    pub bounds: Bounds,
}

/// The month span a season code covers: `(start_month, end_month,
/// end_year_offset)`. `end_year_offset` is 1 for spans that roll into the
/// next year (e.g. Winter = Dec–Feb). Returns `None` for codes outside 21–41.
pub fn season_span(code: u8) -> Option<(u32, u32, i64)> {
    match code {
        21 | 25 => Some((3, 5, 0)),   // Spring (north)
        22 | 26 => Some((6, 8, 0)),   // Summer (north)
        23 | 27 => Some((9, 11, 0)),  // Autumn (north)
        24 | 28 => Some((12, 2, 1)),  // Winter (north), rolls over
        29 => Some((9, 11, 0)),       // Spring (south)
        30 => Some((12, 2, 1)),       // Summer (south), rolls over
        31 => Some((3, 5, 0)),        // Autumn (south)
        32 => Some((6, 8, 0)),        // Winter (south)
        33 => Some((1, 3, 0)),        // Quarter 1
        34 => Some((4, 6, 0)),        // Quarter 2
        35 => Some((7, 9, 0)),        // Quarter 3
        36 => Some((10, 12, 0)),      // Quarter 4
        37 => Some((1, 4, 0)),        // Quadrimester 1
        38 => Some((5, 8, 0)),        // Quadrimester 2
        39 => Some((9, 12, 0)),       // Quadrimester 3
        40 => Some((1, 6, 0)),        // Semester 1
        41 => Some((7, 12, 0)),       // Semester 2
        _ => None,
    }
}

/// One end of an interval.
///
/// `Open` (`..`) means unbounded — the interval extends indefinitely.
/// `Unknown` (empty string) means a real but unstated endpoint. The two are
/// distinct states and are never conflated: both fall back to the same
/// sentinel epoch for bound arithmetic, but the shape survives for
/// round-tripping and for the algebra's kind-sensitive logic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Endpoint {
    Value(Box<Value>),
    Open,
    Unknown,
}

impl Endpoint {
    pub fn is_value(&self) -> bool {
        matches!(self, Endpoint::Value(_))
    }
}

/// A start/end pair of dates or seasons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    pub edtf: String,
    pub level: u8,
    pub start: Endpoint,
    pub end: Endpoint,
    pub bounds: Bounds,
}

/// Whether a collection means "one of" (set) or "all of" (list).
///
/// Metadata only — bounds are computed identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// `[...]` — one of the members.
    OneOf,
    /// `{...}` — all of the members.
    AllOf,
}

/// A set (`[...]`) or list (`{...}`) of dates and seasons.
///
/// Range members (`1670..1672`) are expanded into discrete members at parse
/// time. `earlier`/`later` record `..` open-endedness before the first or
/// after the last member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub edtf: String,
    pub level: u8,
    pub kind: CollectionKind,
    pub members: Vec<Value>,
    pub earlier: bool,
    pub later: bool,
    pub bounds: Bounds,
}

/// Any parsed EDTF expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Value {
    Date(Date),
    DateTime(DateTime),
    Season(Season),
    Interval(Interval),
    Set(Collection),
    List(Collection),
}

impl Value {
    /// The original (trimmed) EDTF text. Round-trip invariant: equals the
    /// trimmed parse input.
    pub fn edtf(&self) -> &str {
        match self {
            Value::Date(d) => &d.edtf,
            Value::DateTime(d) => &d.edtf,
            Value::Season(s) => &s.edtf,
            Value::Interval(i) => &i.edtf,
            Value::Set(c) | Value::List(c) => &c.edtf,
        }
    }

    /// Minimal conformance level the expression's syntax requires.
    pub fn level(&self) -> u8 {
        match self {
            Value::Date(d) => d.level,
            Value::DateTime(_) => 0,
            Value::Season(s) => s.level,
            Value::Interval(i) => i.level,
            Value::Set(c) | Value::List(c) => c.level,
        }
    }

    /// The value's precision. Intervals and collections report the coarsest
    /// precision among their parts (year, when any part is open or unknown).
    pub fn precision(&self) -> Precision {
        match self {
            Value::Date(d) => d.precision,
            Value::DateTime(_) => Precision::Second,
            Value::Season(_) => Precision::Month,
            Value::Interval(i) => {
                let mut p = Precision::Second;
                for ep in [&i.start, &i.end] {
                    match ep {
                        Endpoint::Value(v) => p = p.min(v.precision()),
                        Endpoint::Open | Endpoint::Unknown => p = Precision::Year,
                    }
                }
                p
            }
            Value::Set(c) | Value::List(c) => c
                .members
                .iter()
                .map(Value::precision)
                .min()
                .unwrap_or(Precision::Year),
        }
    }

    /// Exact epoch bounds.
    pub fn bounds(&self) -> &Bounds {
        match self {
            Value::Date(d) => &d.bounds,
            Value::DateTime(d) => &d.bounds,
            Value::Season(s) => &s.bounds,
            Value::Interval(i) => &i.bounds,
            Value::Set(c) | Value::List(c) => &c.bounds,
        }
    }
}
