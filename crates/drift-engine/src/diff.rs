//! Absolute difference between two calendar dates, decomposed into whole
//! years plus remaining days.
//!
//! This is a "calendar years + remainder days" decomposition, not raw
//! day-count division: the year component counts anniversaries of the
//! earlier date, and the day component is the span left over after the last
//! anniversary. `difference(2000-03-01, 2001-02-28)` is therefore
//! `(0, 364)`, never `(1, -1)` or a 365-day quotient.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::is_leap_year;

/// The decomposed gap between two dates. Always non-negative; `(0, 0)` iff
/// the inputs are the same date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateDifference {
    /// Whole calendar years between the dates.
    pub years: i32,
    /// Days left over after the last whole year.
    pub days: i64,
    /// Human-readable representation (e.g., "2 years, 43 days").
    pub human_readable: String,
}

/// Compute the absolute difference between two dates.
///
/// Argument order does not matter; the earlier date is taken as the anchor.
/// The candidate year count is the raw year gap, decremented by one when the
/// later date's (month, day) has not yet reached the anchor's. The remaining
/// days are measured from the anchor shifted into the later date's year —
/// with a Feb-29 anchor clamped to Feb 28 when that year is not a leap year.
/// (Note this clamp is distinct from the March-1 normalization used by year
/// shifts in [`crate::travel`].)
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use drift_engine::diff::date_difference;
///
/// let d1 = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap();
/// let diff = date_difference(d1, d2);
/// assert_eq!((diff.years, diff.days), (0, 365));
/// ```
pub fn date_difference(d1: NaiveDate, d2: NaiveDate) -> DateDifference {
    let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };

    let mut years = hi.year() - lo.year();
    let days = match (hi.month(), hi.day()).cmp(&(lo.month(), lo.day())) {
        Ordering::Equal => 0,
        Ordering::Greater => day_span(lo, hi, hi.year()),
        Ordering::Less => {
            years -= 1;
            day_span(lo, hi, hi.year() - 1)
        }
    };

    let human_readable = format_human(years, days);
    DateDifference {
        years,
        days,
        human_readable,
    }
}

/// Whole-day span from the anchor (`lo` shifted into `anchor_year`, Feb 29
/// clamped to Feb 28 in non-leap years) up to `hi`.
fn day_span(lo: NaiveDate, hi: NaiveDate, anchor_year: i32) -> i64 {
    let (month, day) = if lo.month() == 2 && lo.day() == 29 && !is_leap_year(anchor_year) {
        (2, 28)
    } else {
        (lo.month(), lo.day())
    };
    rata_die(hi.year(), hi.month(), hi.day()) - rata_die(anchor_year, month, day)
}

/// Proleptic Gregorian day number (days since 0001-01-01 == day 1). Pure
/// integer arithmetic, so the shifted anchor never needs to be materialized
/// as a date value.
fn rata_die(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);

    // Shift March to month 1 so February sits at the end of the "year".
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    d + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

fn format_human(years: i32, days: i64) -> String {
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} year{}", years, if years == 1 { "" } else { "s" }));
    }
    if days > 0 || parts.is_empty() {
        parts.push(format!("{} day{}", days, if days == 1 { "" } else { "s" }));
    }
    parts.join(", ")
}

// ── Tests ───────────────────────────────────────────────────────────────────
