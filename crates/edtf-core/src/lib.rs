//! # edtf-core
//!
//! Parsing and algebraic comparison of Extended Date/Time Format (EDTF)
//! expressions.
//!
//! EDTF is an ISO 8601 profile with three conformance levels: plain dates,
//! datetimes, and intervals at level 0; qualifiers, seasons, simple
//! unspecified digits, extended years, and open or unknown interval endpoints
//! at level 1; partial qualification, arbitrary unspecified digits,
//! exponential and significant-digit years, extended seasons, and
//! sets and lists at level 2. [`parse`] always reports the minimal level.
//!
//! Every value carries exact epoch-millisecond bounds in `i128`, so
//! comparisons work for years far outside what native date types represent.
//! [`to_member`] projects any value into a bound quadruple and the thirteen
//! Allen relation functions answer over it in four-valued logic.
//!
//! ## Modules
//!
//! - [`parse`] — `parse` / `parse_with_max_level` entry points
//! - [`classify`] — minimal conformance level detection
//! - [`level0`], [`level1`], [`level2`] — the per-level parsers
//! - [`value`] — parsed value types and their bounds
//! - [`epoch`] — proleptic Gregorian epoch-millisecond arithmetic
//! - [`member`] — projection into relation-ready bound quadruples
//! - [`relation`] — the 13 Allen relations in four-valued logic
//! - [`error`] — error codes and `ParseError`

pub mod classify;
pub mod epoch;
pub mod error;
pub mod level0;
pub mod level1;
pub mod level2;
pub mod member;
pub mod parse;
pub mod relation;
pub mod value;

pub use error::{ErrorCode, ParseError};
pub use member::{to_member, BoundKind, Member};
pub use parse::{parse, parse_with_max_level};
pub use relation::{
    after, before, contains, during, equals, finished_by, finishes, met_by, meets,
    overlapped_by, overlaps, started_by, starts, Truth,
};
pub use value::{
    Bounds, Collection, CollectionKind, Component, ComponentQualifications, Date, DateTime,
    Endpoint, Interval, Precision, Qualification, Season, Unspecified, Value,
};
