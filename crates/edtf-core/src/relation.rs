//! Four-valued Allen interval algebra over [`Member`]s.
//!
//! The 13 temporal relations, each a pure function `(Member, Member) → Truth`.
//! Six are algebraic mirrors of the other seven. Every non-mirror function
//! follows the same fixed evaluation order:
//!
//! 1. **Unknown check** — a bound the relation needs that is `unknown` on
//!    either side makes the answer [`Truth::Unknown`], regardless of the
//!    other operand.
//! 2. **Open-bound short-circuit** — relation-specific: an unbounded end can
//!    never be "before" anything, two starts can only coincide if both are
//!    open or both are closed, and so on.
//! 3. **Closed-bound arithmetic** — a YES-guaranteeing strict inequality over
//!    the worst-case bound pairing, a NO-guaranteeing one over the opposite
//!    worst case, and [`Truth::Maybe`] when neither holds.
//!
//! `meets` is deliberately strict: it answers YES only when all four touching
//! bounds collapse to one identical point. Any slack in the touch is MAYBE.

use serde::Serialize;

use crate::member::{BoundKind, Member};

/// Four-valued answer of a temporal relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Truth {
    Yes,
    No,
    Maybe,
    Unknown,
}

/// Closed bound range `[min, max]` extracted from one side of a member.
#[derive(Clone, Copy)]
struct Range {
    min: i128,
    max: i128,
}

impl Member {
    fn start(&self) -> Option<Range> {
        match (self.s_min, self.s_max) {
            (Some(min), Some(max)) => Some(Range { min, max }),
            _ => None,
        }
    }

    fn end(&self) -> Option<Range> {
        match (self.e_min, self.e_max) {
            (Some(min), Some(max)) => Some(Range { min, max }),
            _ => None,
        }
    }
}

fn any_unknown(kinds: &[BoundKind]) -> bool {
    kinds.contains(&BoundKind::Unknown)
}

fn ranges_disjoint(a: Range, b: Range) -> bool {
    a.max < b.min || a.min > b.max
}

fn is_point(r: Range) -> bool {
    r.min == r.max
}

// ── before / after ──────────────────────────────────────────────────────────

/// `a` ends strictly before `b` starts.
pub fn before(a: &Member, b: &Member) -> Truth {
    if any_unknown(&[a.end_kind, b.start_kind]) {
        return Truth::Unknown;
    }
    if a.end_kind == BoundKind::Open {
        // an unbounded end can never precede anything
        return Truth::No;
    }
    if b.start_kind == BoundKind::Open {
        return Truth::Yes;
    }
    let (Some(ae), Some(bs)) = (a.end(), b.start()) else {
        return Truth::Unknown;
    };
    if ae.max < bs.min {
        Truth::Yes
    } else if ae.min >= bs.max {
        Truth::No
    } else {
        Truth::Maybe
    }
}

/// Mirror of [`before`].
pub fn after(a: &Member, b: &Member) -> Truth {
    before(b, a)
}

// ── meets / met_by ──────────────────────────────────────────────────────────

/// `a`'s end touches `b`'s start exactly, with no gap and no overlap.
///
/// YES only when all four touching bounds collapse to the same point.
pub fn meets(a: &Member, b: &Member) -> Truth {
    if any_unknown(&[a.end_kind, b.start_kind]) {
        return Truth::Unknown;
    }
    if a.end_kind == BoundKind::Open || b.start_kind == BoundKind::Open {
        return Truth::No;
    }
    let (Some(ae), Some(bs)) = (a.end(), b.start()) else {
        return Truth::Unknown;
    };
    // gap on either side, or a's end range strictly inside b's start range
    if ae.max < bs.min || ae.min > bs.max || (bs.min < ae.min && ae.max < bs.max) {
        return Truth::No;
    }
    if is_point(ae) && is_point(bs) && ae.min == bs.min {
        Truth::Yes
    } else {
        Truth::Maybe
    }
}

/// Mirror of [`meets`].
pub fn met_by(a: &Member, b: &Member) -> Truth {
    meets(b, a)
}

// ── overlaps / overlapped_by ────────────────────────────────────────────────

/// `a` starts before `b`, they overlap, and `a` ends inside `b`.
pub fn overlaps(a: &Member, b: &Member) -> Truth {
    if any_unknown(&[a.start_kind, a.end_kind, b.start_kind, b.end_kind]) {
        return Truth::Unknown;
    }
    // an unbounded a-end cannot fall inside b; an unbounded b-start cannot
    // be preceded
    if a.end_kind == BoundKind::Open || b.start_kind == BoundKind::Open {
        return Truth::No;
    }
    let (Some(ae), Some(bs)) = (a.end(), b.start()) else {
        return Truth::Unknown;
    };
    // an open a-start always precedes b's closed start; an open b-end always
    // follows a's closed end
    let a_s = a.start().unwrap_or(Range { min: i128::MIN, max: i128::MIN });
    let b_e = b.end().unwrap_or(Range { min: i128::MAX, max: i128::MAX });

    if a_s.max < bs.min && ae.min > bs.min && ae.max < b_e.max {
        Truth::Yes
    } else if a_s.min >= bs.max || ae.max <= bs.min || ae.min >= b_e.max {
        Truth::No
    } else {
        Truth::Maybe
    }
}

/// Mirror of [`overlaps`].
pub fn overlapped_by(a: &Member, b: &Member) -> Truth {
    overlaps(b, a)
}

// ── starts / started_by ─────────────────────────────────────────────────────

/// `a` and `b` share their start and `a` ends strictly before `b` does.
pub fn starts(a: &Member, b: &Member) -> Truth {
    if any_unknown(&[a.start_kind, a.end_kind, b.start_kind, b.end_kind]) {
        return Truth::Unknown;
    }
    // starts can only coincide when both are open or both are closed
    if (a.start_kind == BoundKind::Open) != (b.start_kind == BoundKind::Open) {
        return Truth::No;
    }
    if a.end_kind == BoundKind::Open {
        return Truth::No;
    }
    let Some(ae) = a.end() else {
        return Truth::Unknown;
    };
    let b_e = b.end().unwrap_or(Range { min: i128::MAX, max: i128::MAX });

    if a.start_kind == BoundKind::Open {
        // both starts unbounded: they coincide; compare the ends
        return if ae.max < b_e.min {
            Truth::Yes
        } else if ae.min >= b_e.max {
            Truth::No
        } else {
            Truth::Maybe
        };
    }
    let (Some(a_s), Some(bs)) = (a.start(), b.start()) else {
        return Truth::Unknown;
    };
    if ranges_disjoint(a_s, bs) || ae.min >= b_e.max {
        return Truth::No;
    }
    if is_point(a_s) && is_point(bs) && a_s.min == bs.min && ae.max < b_e.min {
        Truth::Yes
    } else {
        Truth::Maybe
    }
}

/// Mirror of [`starts`].
pub fn started_by(a: &Member, b: &Member) -> Truth {
    starts(b, a)
}

// ── during / contains ───────────────────────────────────────────────────────

/// `a` lies strictly inside `b`.
pub fn during(a: &Member, b: &Member) -> Truth {
    // a fully unbounded b contains everything
    if b.start_kind == BoundKind::Open && b.end_kind == BoundKind::Open {
        return Truth::Yes;
    }
    if any_unknown(&[a.start_kind, a.end_kind, b.start_kind, b.end_kind]) {
        return Truth::Unknown;
    }
    if a.start_kind == BoundKind::Open || a.end_kind == BoundKind::Open {
        return Truth::No;
    }
    let (Some(a_s), Some(ae)) = (a.start(), a.end()) else {
        return Truth::Unknown;
    };
    // an open b-side always lies beyond a's closed bounds
    let bs = b.start().unwrap_or(Range { min: i128::MIN, max: i128::MIN });
    let b_e = b.end().unwrap_or(Range { min: i128::MAX, max: i128::MAX });

    if a_s.min > bs.max && ae.max < b_e.min {
        Truth::Yes
    } else if a_s.max <= bs.min || ae.min >= b_e.max {
        Truth::No
    } else {
        Truth::Maybe
    }
}

/// Mirror of [`during`].
pub fn contains(a: &Member, b: &Member) -> Truth {
    during(b, a)
}

// ── finishes / finished_by ──────────────────────────────────────────────────

/// `a` and `b` share their end and `a` starts strictly after `b` does.
pub fn finishes(a: &Member, b: &Member) -> Truth {
    if any_unknown(&[a.start_kind, a.end_kind, b.start_kind, b.end_kind]) {
        return Truth::Unknown;
    }
    if (a.end_kind == BoundKind::Open) != (b.end_kind == BoundKind::Open) {
        return Truth::No;
    }
    if a.start_kind == BoundKind::Open {
        return Truth::No;
    }
    let Some(a_s) = a.start() else {
        return Truth::Unknown;
    };
    let bs = b.start().unwrap_or(Range { min: i128::MIN, max: i128::MIN });

    if a.end_kind == BoundKind::Open {
        // both ends unbounded: they coincide; compare the starts
        return if a_s.min > bs.max {
            Truth::Yes
        } else if a_s.max <= bs.min {
            Truth::No
        } else {
            Truth::Maybe
        };
    }
    let (Some(ae), Some(b_e)) = (a.end(), b.end()) else {
        return Truth::Unknown;
    };
    if ranges_disjoint(ae, b_e) || a_s.max <= bs.min {
        return Truth::No;
    }
    if is_point(ae) && is_point(b_e) && ae.min == b_e.min && a_s.min > bs.max {
        Truth::Yes
    } else {
        Truth::Maybe
    }
}

/// Mirror of [`finishes`].
pub fn finished_by(a: &Member, b: &Member) -> Truth {
    finishes(b, a)
}

// ── equals ──────────────────────────────────────────────────────────────────

/// `a` and `b` denote the same span.
///
/// Requires identical start and end kinds; open pairs trivially coincide.
/// YES when every closed bound pair matches exactly; NO when a start or end
/// range cannot overlap at all; MAYBE otherwise.
pub fn equals(a: &Member, b: &Member) -> Truth {
    if any_unknown(&[a.start_kind, a.end_kind, b.start_kind, b.end_kind]) {
        return Truth::Unknown;
    }
    if a.start_kind != b.start_kind || a.end_kind != b.end_kind {
        return Truth::No;
    }
    let mut exact = true;
    for (x, y) in [(a.start(), b.start()), (a.end(), b.end())] {
        match (x, y) {
            (Some(x), Some(y)) => {
                if ranges_disjoint(x, y) {
                    return Truth::No;
                }
                if x.min != y.min || x.max != y.max {
                    exact = false;
                }
            }
            // kinds already match, so both are open together
            (None, None) => {}
            _ => return Truth::Unknown,
        }
    }
    if exact {
        Truth::Yes
    } else {
        Truth::Maybe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::to_member;
    use crate::parse::parse;
    use crate::value::Precision;
    use proptest::prelude::*;

    fn member(text: &str) -> Member {
        to_member(&parse(text).unwrap())
    }

    fn point(at: i128) -> Member {
        Member::closed(at, at, at, at, Precision::Second)
    }

    fn span(s: i128, e: i128) -> Member {
        Member::closed(s, s, e, e, Precision::Second)
    }

    // ── before ──────────────────────────────────────────────────────────

    #[test]
    fn test_before_disjoint_years() {
        assert_eq!(before(&member("1985"), &member("1990")), Truth::Yes);
        assert_eq!(before(&member("1990"), &member("1985")), Truth::No);
    }

    #[test]
    fn test_before_overlapping_ranges_is_maybe() {
        // a decade and a year inside it: the point realizations can fall
        // either way
        assert_eq!(before(&member("201X"), &member("2015")), Truth::Maybe);
    }

    #[test]
    fn test_before_open_end_is_no() {
        assert_eq!(before(&member("1985/.."), &member("1990")), Truth::No);
    }

    #[test]
    fn test_before_open_other_start_is_yes() {
        assert_eq!(before(&member("1985"), &member("../1990")), Truth::Yes);
    }

    // ── meets ───────────────────────────────────────────────────────────

    #[test]
    fn test_meets_exact_touch_is_yes() {
        assert_eq!(meets(&span(0, 100), &span(100, 200)), Truth::Yes);
    }

    #[test]
    fn test_meets_touch_with_slack_is_maybe() {
        let a = Member::closed(0, 0, 90, 110, Precision::Second);
        let b = Member::closed(90, 110, 200, 200, Precision::Second);
        assert_eq!(meets(&a, &b), Truth::Maybe);
    }

    #[test]
    fn test_meets_gap_is_no() {
        assert_eq!(meets(&span(0, 100), &span(150, 200)), Truth::No);
        assert_eq!(meets(&span(0, 100), &span(50, 200)), Truth::No);
    }

    #[test]
    fn test_meets_end_strictly_inside_start_range_is_no() {
        let a = Member::closed(0, 0, 95, 105, Precision::Second);
        let b = Member::closed(90, 110, 200, 200, Precision::Second);
        assert_eq!(meets(&a, &b), Truth::No);
    }

    #[test]
    fn test_meets_open_bound_is_no() {
        assert_eq!(meets(&member("1985/.."), &member("1990")), Truth::No);
    }

    // ── overlaps ────────────────────────────────────────────────────────

    #[test]
    fn test_overlaps_certain() {
        assert_eq!(overlaps(&span(0, 100), &span(50, 200)), Truth::Yes);
    }

    #[test]
    fn test_overlaps_disjoint_is_no() {
        assert_eq!(overlaps(&span(0, 100), &span(150, 200)), Truth::No);
    }

    #[test]
    fn test_overlaps_contained_is_no() {
        // a covers b entirely: a's end is past b's end
        assert_eq!(overlaps(&span(0, 300), &span(50, 200)), Truth::No);
    }

    #[test]
    fn test_overlaps_open_start_helps() {
        // the open start always precedes b's closed start
        let a = member("../1990");
        let b = member("1985/1995");
        assert_eq!(overlaps(&a, &b), Truth::Yes);
    }

    // ── during / contains ───────────────────────────────────────────────

    #[test]
    fn test_during_strict_containment() {
        assert_eq!(during(&span(50, 100), &span(0, 200)), Truth::Yes);
        assert_eq!(during(&span(0, 300), &span(50, 200)), Truth::No);
    }

    #[test]
    fn test_during_fully_open_container_is_yes() {
        assert_eq!(during(&member("1985"), &member("../..")), Truth::Yes);
    }

    #[test]
    fn test_during_month_within_its_year_is_maybe_at_edges() {
        // 1985-06 inside 1985: the year's realization could be exactly the
        // month, so strict containment is not certain
        assert_eq!(during(&member("1985-06"), &member("1985")), Truth::Maybe);
    }

    // ── starts / finishes ───────────────────────────────────────────────

    #[test]
    fn test_starts_shared_point_start() {
        assert_eq!(starts(&span(0, 100), &span(0, 200)), Truth::Yes);
        assert_eq!(starts(&span(0, 200), &span(0, 100)), Truth::No);
        assert_eq!(starts(&span(10, 100), &span(0, 200)), Truth::No);
    }

    #[test]
    fn test_starts_kind_mismatch_is_no() {
        assert_eq!(starts(&member("../1990"), &member("1985/1995")), Truth::No);
    }

    #[test]
    fn test_finishes_shared_point_end() {
        assert_eq!(finishes(&span(100, 200), &span(0, 200)), Truth::Yes);
        assert_eq!(finishes(&span(0, 200), &span(100, 200)), Truth::No);
    }

    // ── equals ──────────────────────────────────────────────────────────

    #[test]
    fn test_equals_same_expression() {
        assert_eq!(equals(&member("1985"), &member("1985")), Truth::Yes);
        assert_eq!(equals(&member("1985"), &member("1986")), Truth::No);
    }

    #[test]
    fn test_equals_overlapping_but_different_is_maybe() {
        assert_eq!(equals(&member("1985"), &member("1985-06")), Truth::Maybe);
    }

    #[test]
    fn test_equals_kind_mismatch_is_no() {
        assert_eq!(equals(&member("../1985"), &member("1980/1985")), Truth::No);
    }

    #[test]
    fn test_equals_matching_open_sides() {
        assert_eq!(equals(&member("../1985"), &member("../1985")), Truth::Yes);
    }

    // ── unknown propagation ─────────────────────────────────────────────

    #[test]
    fn test_unknown_bound_propagates() {
        let u = member("/1985"); // unknown start
        let c = member("1990");
        assert_eq!(equals(&u, &c), Truth::Unknown);
        assert_eq!(during(&u, &c), Truth::Unknown);
        assert_eq!(starts(&u, &c), Truth::Unknown);
        assert_eq!(after(&u, &c), Truth::Unknown);
        assert_eq!(overlaps(&u, &c), Truth::Unknown);
    }

    #[test]
    fn test_unknown_irrelevant_bound_does_not_propagate() {
        // before only needs a's end and b's start; a's unknown start is
        // irrelevant
        let u = member("/1985");
        assert_eq!(before(&u, &member("1990")), Truth::Yes);
    }

    // ── mirrors ─────────────────────────────────────────────────────────

    #[test]
    fn test_mirror_identities_on_samples() {
        let samples = [
            member("1985"),
            member("1990"),
            member("201X"),
            member("1985/1995"),
            member("../1990"),
            member("/1985"),
            member("1985/.."),
            member("[1667,1668,1670..1672]"),
            point(0),
            span(0, 100),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(after(a, b), before(b, a));
                assert_eq!(met_by(a, b), meets(b, a));
                assert_eq!(overlapped_by(a, b), overlaps(b, a));
                assert_eq!(started_by(a, b), starts(b, a));
                assert_eq!(finished_by(a, b), finishes(b, a));
                assert_eq!(contains(a, b), during(b, a));
                assert_eq!(equals(a, b), equals(b, a));
            }
        }
    }

    // ── properties ──────────────────────────────────────────────────────

    prop_compose! {
        fn arb_closed_member()(
            s_min in -1_000_000i128..1_000_000,
            s_len in 0i128..10_000,
            gap in 0i128..10_000,
            e_len in 0i128..10_000,
        ) -> Member {
            let s_max = s_min + s_len;
            let e_min = s_max + gap;
            Member::closed(s_min, s_max, e_min, e_min + e_len, Precision::Second)
        }
    }

    proptest! {
        #[test]
        fn prop_mirrors_agree(a in arb_closed_member(), b in arb_closed_member()) {
            prop_assert_eq!(after(&a, &b), before(&b, &a));
            prop_assert_eq!(contains(&a, &b), during(&b, &a));
            prop_assert_eq!(met_by(&a, &b), meets(&b, &a));
            prop_assert_eq!(overlapped_by(&a, &b), overlaps(&b, &a));
            prop_assert_eq!(started_by(&a, &b), starts(&b, &a));
            prop_assert_eq!(finished_by(&a, &b), finishes(&b, &a));
        }

        #[test]
        fn prop_before_and_after_never_both_yes(a in arb_closed_member(), b in arb_closed_member()) {
            let fwd = before(&a, &b);
            let bwd = before(&b, &a);
            prop_assert!(!(fwd == Truth::Yes && bwd == Truth::Yes));
        }

        #[test]
        fn prop_equals_is_reflexive(a in arb_closed_member()) {
            prop_assert_eq!(equals(&a, &a), Truth::Yes);
        }
    }
}
