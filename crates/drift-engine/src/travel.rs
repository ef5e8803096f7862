//! Calendar-aware arithmetic over date and date-time values.
//!
//! The central type is [`TimeTravel`], a thin wrapper around a [`TimeValue`]
//! that can be shifted forward or backward by a structured [`Offset`]. Year
//! and month components are calendar-sensitive (variable month lengths, leap
//! years); week/day/time-of-day components are flat wall-clock durations.
//! Every shift returns a fresh value, so calls chain without aliasing:
//!
//! ```
//! use chrono::NaiveDate;
//! use drift_engine::travel::{Offset, TimeTravel, TimeValue};
//!
//! let start = NaiveDate::from_ymd_opt(2020, 1, 31).unwrap();
//! let travel = TimeTravel::new(TimeValue::Date(start));
//! let shifted = travel.add(&Offset::months(1)).unwrap();
//! assert_eq!(shifted.to_string(), "2020-02-29"); // 2020 is a leap year
//! ```
//!
//! # Normalization Rules
//!
//! Two distinct Feb-29 policies coexist in this crate and must not be
//! conflated:
//!
//! - a **year** shift that lands Feb 29 on a non-leap year normalizes to
//!   **March 1** of the target year;
//! - the anchor clamp inside [`crate::diff::date_difference`] moves Feb 29
//!   to **Feb 28** instead.
//!
//! A **month** shift keeps the day-of-month verbatim when it is 28 or less,
//! and otherwise clamps it to the last day of the target month (day 31 into
//! a 30-day month becomes 30; day 29/30/31 into February becomes 29 in a
//! leap year, 28 otherwise).
//!
//! Within one `add`/`subtract` call the components apply in a fixed order:
//! years, then months, then the flat duration. The order matters because the
//! month clamp depends on the already-shifted year.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};
use serde::Serialize;

use crate::calendar::{is_leap_year, month_length};
use crate::error::{DriftError, Result};
use crate::units::MONTHS_PER_YEAR;

/// Canonical text form of a date-only value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Canonical text form of a date-time value: microsecond precision with an
/// explicit `±HHMM` UTC offset.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%z";

// ── TimeValue ───────────────────────────────────────────────────────────────

/// A calendar date or a calendar date-time with a resolved UTC offset.
///
/// The two variants are deliberately kept in one sum type: every arithmetic
/// operation pattern-matches on the variant, and operations that make no
/// sense for a date-only value (time-of-day offsets, for one) are rejected
/// up front instead of being coerced.
///
/// Values of mismatched variants compare as unequal and unordered —
/// `partial_cmp` returns `None` rather than inventing an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TimeValue {
    /// A date on the proleptic Gregorian calendar.
    Date(NaiveDate),
    /// A date-time carrying an already-resolved UTC offset.
    DateTime(DateTime<FixedOffset>),
}

impl TimeValue {
    pub fn year(&self) -> i32 {
        match self {
            Self::Date(d) => d.year(),
            Self::DateTime(dt) => dt.year(),
        }
    }

    pub fn month(&self) -> u32 {
        match self {
            Self::Date(d) => d.month(),
            Self::DateTime(dt) => dt.month(),
        }
    }

    pub fn day(&self) -> u32 {
        match self {
            Self::Date(d) => d.day(),
            Self::DateTime(dt) => dt.day(),
        }
    }

    /// The date portion of either variant.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(d) => *d,
            Self::DateTime(dt) => dt.date_naive(),
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }

    /// Rebuild the value with a new calendar date, keeping the time-of-day
    /// and UTC offset of a date-time variant intact. `None` when the
    /// (year, month, day) triple is not a real date or falls outside the
    /// supported range.
    pub(crate) fn with_ymd(&self, year: i32, month: u32, day: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        match self {
            Self::Date(_) => Some(Self::Date(date)),
            Self::DateTime(dt) => {
                let offset = *dt.offset();
                let local = date.and_time(dt.time());
                let utc = local.checked_sub_signed(Duration::seconds(i64::from(
                    offset.local_minus_utc(),
                )))?;
                Some(Self::DateTime(DateTime::from_naive_utc_and_offset(utc, offset)))
            }
        }
    }

    fn checked_add_signed(&self, duration: Duration) -> Option<Self> {
        match self {
            Self::Date(d) => d.checked_add_signed(duration).map(Self::Date),
            Self::DateTime(dt) => dt.checked_add_signed(duration).map(Self::DateTime),
        }
    }

    fn checked_sub_signed(&self, duration: Duration) -> Option<Self> {
        match self {
            Self::Date(d) => d.checked_sub_signed(duration).map(Self::Date),
            Self::DateTime(dt) => dt.checked_sub_signed(duration).map(Self::DateTime),
        }
    }
}

impl From<NaiveDate> for TimeValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for TimeValue {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::DateTime(datetime)
    }
}

impl PartialOrd for TimeValue {
    /// Same-variant values order chronologically; mismatched variants are
    /// unordered.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::DateTime(dt) => write!(f, "{}", dt.format(DATETIME_FORMAT)),
        }
    }
}

impl FromStr for TimeValue {
    type Err = DriftError;

    /// Parses exactly the two canonical formats; anything else is rejected.
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(dt) = DateTime::parse_from_str(s, DATETIME_FORMAT) {
            return Ok(Self::DateTime(dt));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self::Date)
            .map_err(|e| {
                DriftError::InvalidArgument(format!(
                    "'{s}' is not a canonical date or date-time: {e}"
                ))
            })
    }
}

// ── Offset ──────────────────────────────────────────────────────────────────

/// A structured shift: a count per recognized unit, all non-negative.
///
/// Fields are public and the struct is `Default`, so sparse offsets read
/// like keyword arguments:
///
/// ```
/// use drift_engine::travel::Offset;
///
/// let offset = Offset { months: 2, days: 10, ..Offset::default() };
/// assert!(!offset.is_zero());
/// ```
///
/// Counts are signed so that a negative value can be *reported* as a usage
/// error instead of being silently reinterpreted as subtraction — direction
/// is chosen by calling [`TimeTravel::add`] or [`TimeTravel::subtract`],
/// never by the sign of a count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Offset {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
}

macro_rules! offset_constructor {
    ($($field:ident),+) => {
        $(
            #[doc = concat!("An offset of `", stringify!($field), "` only.")]
            pub fn $field(count: i64) -> Self {
                Self { $field: count, ..Self::default() }
            }
        )+
    };
}

impl Offset {
    offset_constructor!(
        years, months, weeks, days, hours, minutes, seconds, milliseconds, microseconds
    );

    fn fields(&self) -> [(&'static str, i64); 9] {
        [
            ("years", self.years),
            ("months", self.months),
            ("weeks", self.weeks),
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
            ("milliseconds", self.milliseconds),
            ("microseconds", self.microseconds),
        ]
    }

    /// True when every count is zero.
    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|(_, count)| *count == 0)
    }

    /// Rejects any negative count.
    pub fn validate(&self) -> Result<()> {
        for (name, count) in self.fields() {
            if count < 0 {
                return Err(DriftError::InvalidArgument(format!(
                    "`{name}` must be a non-negative integer, got {count}"
                )));
            }
        }
        Ok(())
    }

    fn has_time_of_day(&self) -> bool {
        self.hours != 0
            || self.minutes != 0
            || self.seconds != 0
            || self.milliseconds != 0
            || self.microseconds != 0
    }
}

// ── TimeTravel ──────────────────────────────────────────────────────────────

/// A date or date-time that can be shifted by calendar and fixed-duration
/// units.
///
/// `TimeTravel` is a value type: [`add`](Self::add) and
/// [`subtract`](Self::subtract) leave `self` untouched and return the
/// shifted traveller, so a chain of shifts is a chain of plain calls. The
/// type is `Copy`; cloning it is the moral equivalent of the usual
/// "copy before you mutate" dance, without the mutation.
///
/// ```
/// use chrono::NaiveDate;
/// use drift_engine::travel::{Offset, TimeTravel, TimeValue};
///
/// let leap_day = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
/// let travel = TimeTravel::new(TimeValue::Date(leap_day));
///
/// // 2021 is not a leap year: a year shift off Feb 29 lands on March 1.
/// let shifted = travel.add(&Offset::years(1)).unwrap();
/// assert_eq!(shifted.to_string(), "2021-03-01");
///
/// // The original traveller is unchanged.
/// assert_eq!(travel.to_string(), "2020-02-29");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeTravel {
    value: TimeValue,
}

impl TimeTravel {
    pub fn new(value: TimeValue) -> Self {
        Self { value }
    }

    /// The wrapped value.
    pub fn value(&self) -> TimeValue {
        self.value
    }

    /// Shift forward by `offset`.
    ///
    /// Components apply in order: years, then months, then the flat
    /// week/day/time-of-day duration.
    ///
    /// # Errors
    ///
    /// - [`DriftError::InvalidArgument`] — a negative count, or arithmetic
    ///   leaving the supported date range.
    /// - [`DriftError::UnsupportedCombination`] — a nonzero time-of-day
    ///   count applied to a date-only value.
    pub fn add(&self, offset: &Offset) -> Result<Self> {
        self.shifted(offset, false)
    }

    /// Shift backward by `offset`. Same contract as [`add`](Self::add).
    pub fn subtract(&self, offset: &Offset) -> Result<Self> {
        self.shifted(offset, true)
    }

    fn shifted(&self, offset: &Offset, backward: bool) -> Result<Self> {
        offset.validate()?;
        if self.value.is_date() && offset.has_time_of_day() {
            return Err(DriftError::UnsupportedCombination(
                "hours/minutes/seconds/milliseconds/microseconds cannot be applied \
                 to a date-only value"
                    .to_string(),
            ));
        }
        apply(self.value, offset, backward)
            .map(Self::new)
            .ok_or_else(|| {
                DriftError::InvalidArgument(
                    "date arithmetic left the supported range".to_string(),
                )
            })
    }
}

impl fmt::Display for TimeTravel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

// ── Shift internals ─────────────────────────────────────────────────────────

/// Years → months → flat duration. `None` on range overflow.
fn apply(value: TimeValue, offset: &Offset, backward: bool) -> Option<TimeValue> {
    let sign: i64 = if backward { -1 } else { 1 };
    let mut value = value;
    if offset.years != 0 {
        value = shift_years(value, sign * offset.years)?;
    }
    if offset.months != 0 {
        value = shift_months(value, offset.months, backward)?;
    }
    let duration = flat_duration(offset)?;
    if backward {
        value.checked_sub_signed(duration)
    } else {
        value.checked_add_signed(duration)
    }
}

/// Adjusts the year field. Feb 29 landing on a non-leap year normalizes to
/// March 1 of the target year.
fn shift_years(value: TimeValue, delta: i64) -> Option<TimeValue> {
    let target = i32::try_from(i64::from(value.year()) + delta).ok()?;
    if value.month() == 2 && value.day() == 29 && !is_leap_year(target) {
        value.with_ymd(target, 3, 1)
    } else {
        value.with_ymd(target, value.month(), value.day())
    }
}

/// Decomposes the month count into whole years plus a 0..=11 remainder, then
/// wraps the remainder around 12. A day-of-month of 28 or less survives
/// as-is; larger days clamp to the target month's length.
fn shift_months(value: TimeValue, months: i64, backward: bool) -> Option<TimeValue> {
    let whole_years = months / MONTHS_PER_YEAR;
    let remainder = months % MONTHS_PER_YEAR;

    let mut value = value;
    if whole_years > 0 {
        let delta = if backward { -whole_years } else { whole_years };
        value = shift_years(value, delta)?;
    }
    if remainder == 0 {
        return Some(value);
    }

    let month = i64::from(value.month());
    let year = i64::from(value.year());
    let (target_year, target_month) = if backward {
        let m = month - remainder;
        if m <= 0 { (year - 1, m + MONTHS_PER_YEAR) } else { (year, m) }
    } else {
        let m = month + remainder;
        if m > MONTHS_PER_YEAR { (year + 1, m - MONTHS_PER_YEAR) } else { (year, m) }
    };
    let target_year = i32::try_from(target_year).ok()?;
    let target_month = u32::try_from(target_month).ok()?;

    let day = value.day();
    let day = if day <= 28 {
        day
    } else {
        day.min(month_length(target_year, target_month))
    };
    value.with_ymd(target_year, target_month, day)
}

/// Sums the calendar-insensitive components into one wall-clock duration.
fn flat_duration(offset: &Offset) -> Option<Duration> {
    let mut total = Duration::zero();
    total = total.checked_add(&Duration::try_weeks(offset.weeks)?)?;
    total = total.checked_add(&Duration::try_days(offset.days)?)?;
    total = total.checked_add(&Duration::try_hours(offset.hours)?)?;
    total = total.checked_add(&Duration::try_minutes(offset.minutes)?)?;
    total = total.checked_add(&Duration::try_seconds(offset.seconds)?)?;
    total = total.checked_add(&Duration::try_milliseconds(offset.milliseconds)?)?;
    total = total.checked_add(&Duration::microseconds(offset.microseconds))?;
    Some(total)
}

// ── Tests ───────────────────────────────────────────────────────────────────
