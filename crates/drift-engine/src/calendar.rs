//! Calendar primitives: the leap-year test, month lengths, weekday names,
//! and month-boundary helpers.
//!
//! Everything here is a pure function over its inputs; the arithmetic
//! modules build on these.

use crate::error::{DriftError, Result};
use crate::travel::TimeValue;

/// True iff `year` is a leap year on the proleptic Gregorian calendar:
/// divisible by 4 and (not divisible by 100, or divisible by 400).
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Month length for a month already known to be in 1..=12.
pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Number of days in the given month.
///
/// # Errors
///
/// [`DriftError::InvalidArgument`] unless `month` is in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(DriftError::InvalidArgument(format!(
            "`month` must be in 1..=12, got {month}"
        )));
    }
    Ok(month_length(year, month))
}

/// The Gregorian weekday name for a date or date-time value: `"Monday"`,
/// or `"Mon"` when `shortened`.
pub fn day_of_week(value: &TimeValue, shortened: bool) -> String {
    let fmt = if shortened { "%a" } else { "%A" };
    value.date().format(fmt).to_string()
}

/// True iff the value falls on a leap day.
pub fn is_february_29th(value: &TimeValue) -> bool {
    value.month() == 2 && value.day() == 29
}

/// The same value moved to day 1 of its month.
pub fn first_day_of_month(value: &TimeValue) -> Result<TimeValue> {
    value
        .with_ymd(value.year(), value.month(), 1)
        .ok_or_else(out_of_range)
}

/// The same value moved to the last day of its month (leap-aware for
/// February).
pub fn last_day_of_month(value: &TimeValue) -> Result<TimeValue> {
    let day = month_length(value.year(), value.month());
    value
        .with_ymd(value.year(), value.month(), day)
        .ok_or_else(out_of_range)
}

/// The same value moved to day 1 of the following month, rolling December
/// into January of the next year.
pub fn first_day_of_next_month(value: &TimeValue) -> Result<TimeValue> {
    let (year, month) = if value.month() == 12 {
        (value.year().checked_add(1).ok_or_else(out_of_range)?, 1)
    } else {
        (value.year(), value.month() + 1)
    };
    value.with_ymd(year, month, 1).ok_or_else(out_of_range)
}

fn out_of_range() -> DriftError {
    DriftError::InvalidArgument("date arithmetic left the supported range".to_string())
}

// ── Tests ───────────────────────────────────────────────────────────────────
