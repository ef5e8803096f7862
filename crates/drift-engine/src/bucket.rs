//! Partitioning a date or date-time range into a fixed number of
//! contiguous, non-overlapping buckets.

use serde::Serialize;

use crate::error::{DriftError, Result};
use crate::travel::{Offset, TimeTravel, TimeValue};

// ── Stride ──────────────────────────────────────────────────────────────────

/// The units a [`Stride`] can step by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrideUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
}

/// A single-granularity step: exactly one unit, a positive count.
///
/// Bucketing is defined only for single-unit offsets, so the constraint
/// lives in this type's constructor instead of being re-checked deep inside
/// the partitioning loop. A general multi-unit [`Offset`] cannot be passed
/// to [`bucketize`] at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stride {
    unit: StrideUnit,
    count: i64,
}

impl Stride {
    /// # Errors
    ///
    /// [`DriftError::InvalidArgument`] unless `count` is positive.
    pub fn new(unit: StrideUnit, count: i64) -> Result<Self> {
        if count <= 0 {
            return Err(DriftError::InvalidArgument(format!(
                "stride count must be a positive integer, got {count}"
            )));
        }
        Ok(Self { unit, count })
    }

    pub fn unit(&self) -> StrideUnit {
        self.unit
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    fn to_offset(self) -> Offset {
        match self.unit {
            StrideUnit::Years => Offset::years(self.count),
            StrideUnit::Months => Offset::months(self.count),
            StrideUnit::Weeks => Offset::weeks(self.count),
            StrideUnit::Days => Offset::days(self.count),
            StrideUnit::Hours => Offset::hours(self.count),
            StrideUnit::Minutes => Offset::minutes(self.count),
            StrideUnit::Seconds => Offset::seconds(self.count),
            StrideUnit::Milliseconds => Offset::milliseconds(self.count),
            StrideUnit::Microseconds => Offset::microseconds(self.count),
        }
    }
}

// ── Bucket ──────────────────────────────────────────────────────────────────

/// One contiguous sub-range, end inclusive. Same variant on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bucket {
    pub start: TimeValue,
    pub end: TimeValue,
}

/// Partition the range beginning at `start` into `num_buckets` contiguous
/// buckets of one stride each.
///
/// Each bucket spans from the cursor's pre-step value to its post-step
/// value. For **date-only** inputs the end is pulled inward by one day so
/// consecutive buckets are inclusive and non-overlapping: adjacent buckets
/// differ by exactly one day at the seam. For **date-time** inputs the end
/// is the raw post-step instant, so adjacent buckets share their boundary
/// instant (continuous, not day-clamped).
///
/// `ascending = false` walks backward from `start`; the result is still
/// presented in ascending chronological order with `start <= end` in every
/// bucket.
///
/// # Errors
///
/// - [`DriftError::InvalidArgument`] — `num_buckets` is zero.
/// - [`DriftError::UnsupportedCombination`] — a time-of-day stride over a
///   date-only start.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use drift_engine::bucket::{bucketize, Stride, StrideUnit};
/// use drift_engine::travel::TimeValue;
///
/// let start = TimeValue::Date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
/// let stride = Stride::new(StrideUnit::Months, 1).unwrap();
/// let buckets = bucketize(&start, 3, &stride, true).unwrap();
///
/// let text: Vec<(String, String)> = buckets
///     .iter()
///     .map(|b| (b.start.to_string(), b.end.to_string()))
///     .collect();
/// assert_eq!(text[0], ("2020-01-01".into(), "2020-01-31".into()));
/// assert_eq!(text[1], ("2020-02-01".into(), "2020-02-29".into())); // leap year
/// assert_eq!(text[2], ("2020-03-01".into(), "2020-03-31".into()));
/// ```
pub fn bucketize(
    start: &TimeValue,
    num_buckets: usize,
    stride: &Stride,
    ascending: bool,
) -> Result<Vec<Bucket>> {
    if num_buckets == 0 {
        return Err(DriftError::InvalidArgument(
            "`num_buckets` must be a positive integer".to_string(),
        ));
    }

    let offset = stride.to_offset();
    let one_day = Offset::days(1);
    let mut buckets = Vec::with_capacity(num_buckets);
    let mut cursor = TimeTravel::new(*start);

    for i in 0..num_buckets {
        let pre_step = cursor.value();
        cursor = if ascending {
            cursor.add(&offset)?
        } else {
            cursor.subtract(&offset)?
        };
        let end = match cursor.value() {
            TimeValue::Date(_) => {
                let inward = if ascending {
                    cursor.subtract(&one_day)?
                } else {
                    cursor.add(&one_day)?
                };
                inward.value()
            }
            TimeValue::DateTime(_) => cursor.value(),
        };
        // The first bucket starts at the caller's value, not the cursor
        // snapshot (they agree today, but the original start is the contract).
        let bucket_start = if i == 0 { *start } else { pre_step };
        buckets.push(Bucket {
            start: bucket_start,
            end,
        });
    }

    if !ascending {
        // Walked newest→oldest with start/end reversed per bucket; flip both
        // so the output is ascending with start < end throughout.
        buckets.reverse();
        for bucket in &mut buckets {
            std::mem::swap(&mut bucket.start, &mut bucket.end);
        }
    }
    Ok(buckets)
}

/// [`bucketize`], rendered to the canonical text formats.
pub fn bucketize_strings(
    start: &TimeValue,
    num_buckets: usize,
    stride: &Stride,
    ascending: bool,
) -> Result<Vec<(String, String)>> {
    let buckets = bucketize(start, num_buckets, stride, ascending)?;
    Ok(buckets
        .iter()
        .map(|b| (b.start.to_string(), b.end.to_string()))
        .collect())
}

// ── Tests ───────────────────────────────────────────────────────────────────
