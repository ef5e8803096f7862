//! # drift-engine
//!
//! Calendar-aware date/time arithmetic. The engine advances or retreats a
//! date or date-time by calendar units (years, months) and fixed-duration
//! units (weeks down to microseconds), handling variable month lengths,
//! leap years, and the Feb-29 edge cases, and derives three higher-level
//! operations from that primitive: date differences decomposed into whole
//! years plus remaining days, ordered sequences between two bounds at a
//! fixed offset, and partitioning a range into contiguous buckets.
//!
//! Everything is pure, synchronous, and deterministic: no system clock, no
//! timezone database (date-times carry an already-resolved UTC offset), no
//! I/O. Usage errors — negative counts, mixed date/date-time bounds,
//! time-of-day offsets on date-only values — are detected eagerly and
//! reported, never coerced.
//!
//! ## Modules
//!
//! - [`calendar`] — Leap-year test, month lengths, weekday names, month boundaries
//! - [`diff`] — Absolute date difference as (whole years, remaining days)
//! - [`travel`] — The [`TimeTravel`] arithmetic value and [`Offset`] type
//! - [`range`] — Ordered sequences between two bounds at a fixed offset
//! - [`bucket`] — Partitioning a range into contiguous buckets
//! - [`units`] — Fixed time-unit conversion factors
//! - [`error`] — Error types

pub mod bucket;
pub mod calendar;
pub mod diff;
pub mod error;
pub mod range;
pub mod travel;
pub mod units;

pub use bucket::{bucketize, bucketize_strings, Bucket, Stride, StrideUnit};
pub use calendar::{
    day_of_week, days_in_month, first_day_of_month, first_day_of_next_month, is_february_29th,
    is_leap_year, last_day_of_month,
};
pub use diff::{date_difference, DateDifference};
pub use error::DriftError;
pub use range::{generate, generate_strings};
pub use travel::{Offset, TimeTravel, TimeValue, DATE_FORMAT, DATETIME_FORMAT};
