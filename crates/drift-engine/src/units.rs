//! Fixed conversion factors between time units.
//!
//! Yearly factors come in non-leap (365-day) and leap (366-day) flavors;
//! everything else is calendar-insensitive.

pub const MONTHS_PER_YEAR: i64 = 12;

pub const MICROSECONDS_PER_SECOND: i64 = 1_000_000;
pub const MICROSECONDS_PER_MINUTE: i64 = MICROSECONDS_PER_SECOND * 60;
pub const MICROSECONDS_PER_HOUR: i64 = MICROSECONDS_PER_MINUTE * 60;
pub const MICROSECONDS_PER_DAY: i64 = MICROSECONDS_PER_HOUR * 24;
pub const MICROSECONDS_PER_WEEK: i64 = MICROSECONDS_PER_DAY * 7;
pub const MICROSECONDS_PER_NON_LEAP_YEAR: i64 = MICROSECONDS_PER_DAY * 365;
pub const MICROSECONDS_PER_LEAP_YEAR: i64 = MICROSECONDS_PER_DAY * 366;

pub const MILLISECONDS_PER_SECOND: i64 = 1000;
pub const MILLISECONDS_PER_MINUTE: i64 = MILLISECONDS_PER_SECOND * 60;
pub const MILLISECONDS_PER_HOUR: i64 = MILLISECONDS_PER_MINUTE * 60;
pub const MILLISECONDS_PER_DAY: i64 = MILLISECONDS_PER_HOUR * 24;
pub const MILLISECONDS_PER_WEEK: i64 = MILLISECONDS_PER_DAY * 7;
pub const MILLISECONDS_PER_NON_LEAP_YEAR: i64 = MILLISECONDS_PER_DAY * 365;
pub const MILLISECONDS_PER_LEAP_YEAR: i64 = MILLISECONDS_PER_DAY * 366;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * 60;
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * 24;
pub const SECONDS_PER_WEEK: i64 = SECONDS_PER_DAY * 7;
pub const SECONDS_PER_NON_LEAP_YEAR: i64 = SECONDS_PER_DAY * 365;
pub const SECONDS_PER_LEAP_YEAR: i64 = SECONDS_PER_DAY * 366;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * 24;
pub const MINUTES_PER_WEEK: i64 = MINUTES_PER_DAY * 7;
pub const MINUTES_PER_NON_LEAP_YEAR: i64 = MINUTES_PER_DAY * 365;
pub const MINUTES_PER_LEAP_YEAR: i64 = MINUTES_PER_DAY * 366;

pub const HOURS_PER_DAY: i64 = 24;
pub const HOURS_PER_WEEK: i64 = HOURS_PER_DAY * 7;
pub const HOURS_PER_NON_LEAP_YEAR: i64 = HOURS_PER_DAY * 365;
pub const HOURS_PER_LEAP_YEAR: i64 = HOURS_PER_DAY * 366;
