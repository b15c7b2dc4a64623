//! The algebra-only `Member` projection.
//!
//! Every comparison between two EDTF values goes through [`to_member`] —
//! never through raw epoch numbers — because an endpoint's kind (closed,
//! open, unknown) materially changes relation outcomes. A point-precision
//! value projects to collapsed bound pairs; coarse precision or unspecified
//! digits widen each pair to the value's `[min, max]`. The widening is
//! genuine bound uncertainty, not a duration.

use serde::Serialize;

use crate::value::{Endpoint, Precision, Value};

/// The kind of one of a member's two ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    /// A stated, bounded end.
    Closed,
    /// Unbounded: extends indefinitely.
    Open,
    /// A real but unstated end.
    Unknown,
}

/// Bound-quadruple projection of a temporal value, consumed only by the
/// Allen relation functions.
///
/// `s_min..=s_max` is where the start can lie, `e_min..=e_max` where the end
/// can lie. Bounds are `None` exactly when the matching kind is not
/// [`BoundKind::Closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Member {
    pub s_min: Option<i128>,
    pub s_max: Option<i128>,
    pub e_min: Option<i128>,
    pub e_max: Option<i128>,
    pub start_kind: BoundKind,
    pub end_kind: BoundKind,
    pub precision: Precision,
}

impl Member {
    /// A fully closed member from explicit bound ranges. Mostly useful in
    /// tests and for callers synthesizing members directly.
    pub fn closed(s_min: i128, s_max: i128, e_min: i128, e_max: i128, precision: Precision) -> Self {
        Member {
            s_min: Some(s_min),
            s_max: Some(s_max),
            e_min: Some(e_min),
            e_max: Some(e_max),
            start_kind: BoundKind::Closed,
            end_kind: BoundKind::Closed,
            precision,
        }
    }
}

/// Project any value into its [`Member`] for relation evaluation.
pub fn to_member(value: &Value) -> Member {
    match value {
        Value::Interval(i) => {
            let (start_kind, s_min, s_max) = endpoint_bounds(&i.start);
            let (end_kind, e_min, e_max) = endpoint_bounds(&i.end);
            Member {
                s_min,
                s_max,
                e_min,
                e_max,
                start_kind,
                end_kind,
                precision: value.precision(),
            }
        }
        Value::Set(c) | Value::List(c) => {
            // member-derived span; the earlier/later sentinels in the
            // collection's bounds become open kinds instead
            let span_min = c.members.iter().map(|m| m.bounds().min_epoch).min();
            let span_max = c.members.iter().map(|m| m.bounds().max_epoch).max();
            let start_kind = if c.earlier { BoundKind::Open } else { BoundKind::Closed };
            let end_kind = if c.later { BoundKind::Open } else { BoundKind::Closed };
            Member {
                s_min: closed_bound(start_kind, span_min),
                s_max: closed_bound(start_kind, span_max),
                e_min: closed_bound(end_kind, span_min),
                e_max: closed_bound(end_kind, span_max),
                start_kind,
                end_kind,
                precision: value.precision(),
            }
        }
        // dates, datetimes, seasons: a point somewhere in [min, max]
        _ => {
            let b = value.bounds();
            Member::closed(
                b.min_epoch,
                b.max_epoch,
                b.min_epoch,
                b.max_epoch,
                value.precision(),
            )
        }
    }
}

fn endpoint_bounds(ep: &Endpoint) -> (BoundKind, Option<i128>, Option<i128>) {
    match ep {
        Endpoint::Value(v) => {
            let b = v.bounds();
            (BoundKind::Closed, Some(b.min_epoch), Some(b.max_epoch))
        }
        Endpoint::Open => (BoundKind::Open, None, None),
        Endpoint::Unknown => (BoundKind::Unknown, None, None),
    }
}

fn closed_bound(kind: BoundKind, value: Option<i128>) -> Option<i128> {
    if kind == BoundKind::Closed {
        value
    } else {
        None
    }
}
