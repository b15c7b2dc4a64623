//! Calendar and bounds arithmetic over exact epoch milliseconds.
//!
//! EDTF years can exceed what any native date type represents (extended and
//! exponential years reach far beyond `chrono`'s ±262,000-year window), so all
//! authoritative bound values are signed `i128` milliseconds since the Unix
//! epoch, computed with proleptic-Gregorian day counting. A best-effort
//! `chrono::DateTime<Utc>` projection is available for callers that want a
//! native date; it clamps at `chrono`'s limits and reports when it did.
//!
//! Everything here is a pure function — no system clock, no caches.

use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds per second.
pub const MS_PER_SECOND: i128 = 1_000;
/// Milliseconds per minute.
pub const MS_PER_MINUTE: i128 = 60 * MS_PER_SECOND;
/// Milliseconds per hour.
pub const MS_PER_HOUR: i128 = 60 * MS_PER_MINUTE;
/// Milliseconds per day.
pub const MS_PER_DAY: i128 = 24 * MS_PER_HOUR;

/// Sentinel epoch for a bound that extends indefinitely into the past.
pub const UNBOUNDED_PAST: i128 = i128::MIN;
/// Sentinel epoch for a bound that extends indefinitely into the future.
pub const UNBOUNDED_FUTURE: i128 = i128::MAX;

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
///
/// Uses astronomical year numbering, so year 0 exists (and is a leap year)
/// and negative years work: `-1` is 2 BCE.
pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in `month` of `year`. `month` must be in `1..=12`.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Days since 1970-01-01 for a proleptic-Gregorian civil date.
///
/// Works for any `i64` year without overflow (the day count fits comfortably
/// in `i128`). `month` is `1..=12`, `day` is `1..=days_in_month`.
fn days_from_epoch(year: i64, month: u32, day: u32) -> i128 {
    let y = i128::from(year) - if month <= 2 { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400); // [0, 399]
    let mp = (i128::from(month) + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + i128::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Epoch milliseconds at midnight (00:00:00.000) of a civil date.
pub fn epoch_millis(year: i64, month: u32, day: u32) -> i128 {
    days_from_epoch(year, month, day) * MS_PER_DAY
}

/// Epoch milliseconds for a civil date plus time-of-day components.
pub fn epoch_millis_at(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> i128 {
    epoch_millis(year, month, day)
        + i128::from(hour) * MS_PER_HOUR
        + i128::from(minute) * MS_PER_MINUTE
        + i128::from(second) * MS_PER_SECOND
}

/// Epoch milliseconds of the first instant of `year` (Jan 1, midnight).
pub fn year_min(year: i64) -> i128 {
    epoch_millis(year, 1, 1)
}

/// Epoch milliseconds of the last instant of `year` (Dec 31, 23:59:59.999).
pub fn year_max(year: i64) -> i128 {
    epoch_millis(year, 12, 31) + MS_PER_DAY - 1
}

/// Epoch milliseconds of the first instant of a month.
pub fn month_min(year: i64, month: u32) -> i128 {
    epoch_millis(year, month, 1)
}

/// Epoch milliseconds of the last instant of a month.
pub fn month_max(year: i64, month: u32) -> i128 {
    epoch_millis(year, month, days_in_month(year, month)) + MS_PER_DAY - 1
}

/// Epoch milliseconds of the last instant of a day (23:59:59.999).
pub fn day_max(year: i64, month: u32, day: u32) -> i128 {
    epoch_millis(year, month, day) + MS_PER_DAY - 1
}

/// Project an exact epoch into a native `chrono` instant, clamping when the
/// value falls outside `chrono`'s representable range.
///
/// Returns the (possibly clamped) instant and whether clamping happened. The
/// exact `i128` stays authoritative for all comparisons; this projection is a
/// convenience only.
pub fn project(ms: i128) -> (DateTime<Utc>, bool) {
    let floor = i128::from(DateTime::<Utc>::MIN_UTC.timestamp_millis());
    let ceil = i128::from(DateTime::<Utc>::MAX_UTC.timestamp_millis());
    if ms < floor {
        return (DateTime::<Utc>::MIN_UTC, true);
    }
    if ms > ceil {
        return (DateTime::<Utc>::MAX_UTC, true);
    }
    // Safe cast: ms is within chrono's millisecond range, which is within i64.
    match Utc.timestamp_millis_opt(ms as i64).single() {
        Some(dt) => (dt, false),
        None => (DateTime::<Utc>::MIN_UTC, true),
    }
}
