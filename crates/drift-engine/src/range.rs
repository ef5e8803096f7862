//! Ordered sequences of dates or date-times between two bounds at a fixed
//! offset.

use crate::error::{DriftError, Result};
use crate::travel::{Offset, TimeTravel, TimeValue};

/// Generate every value reachable from one bound by repeated application of
/// `offset` that still lies within `[start, end]`.
///
/// `ascending` picks the iteration direction: ascending runs seed with
/// `start` and step forward, descending runs seed with `end` and step
/// backward. The returned sequence is ordered start→end either way —
/// direction only decides which boundary is guaranteed present when the
/// offset does not divide the range evenly.
///
/// # Errors
///
/// - [`DriftError::TypeMismatch`] — `start` and `end` mix date-only and
///   date-time values.
/// - [`DriftError::OrderingViolation`] — `start > end`.
/// - [`DriftError::InvalidArgument`] — a negative count, or an all-zero
///   offset (which could never cross the opposite bound).
/// - [`DriftError::UnsupportedCombination`] — time-of-day counts with
///   date-only bounds.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use drift_engine::range::generate;
/// use drift_engine::travel::{Offset, TimeValue};
///
/// let start = TimeValue::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
/// let end = TimeValue::Date(NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());
/// let sequence = generate(&start, &end, &Offset::days(3), true).unwrap();
/// let text: Vec<String> = sequence.iter().map(|v| v.to_string()).collect();
/// assert_eq!(text, ["2023-01-01", "2023-01-04", "2023-01-07", "2023-01-10"]);
/// ```
pub fn generate(
    start: &TimeValue,
    end: &TimeValue,
    offset: &Offset,
    ascending: bool,
) -> Result<Vec<TimeValue>> {
    check_bounds(start, end)?;
    offset.validate()?;
    if offset.is_zero() {
        return Err(DriftError::InvalidArgument(
            "`offset` must have at least one non-zero unit".to_string(),
        ));
    }

    let mut values = Vec::new();
    if ascending {
        values.push(*start);
        let mut cursor = TimeTravel::new(*start);
        loop {
            cursor = cursor.add(offset)?;
            if cursor.value() > *end {
                break;
            }
            values.push(cursor.value());
        }
    } else {
        values.push(*end);
        let mut cursor = TimeTravel::new(*end);
        loop {
            cursor = cursor.subtract(offset)?;
            if cursor.value() < *start {
                break;
            }
            values.push(cursor.value());
        }
        // Collected end→start; present start→end like the ascending runs.
        values.reverse();
    }
    Ok(values)
}

/// [`generate`], rendered to the canonical text formats.
pub fn generate_strings(
    start: &TimeValue,
    end: &TimeValue,
    offset: &Offset,
    ascending: bool,
) -> Result<Vec<String>> {
    let values = generate(start, end, offset, ascending)?;
    Ok(values.iter().map(TimeValue::to_string).collect())
}

fn check_bounds(start: &TimeValue, end: &TimeValue) -> Result<()> {
    if start.is_date() != end.is_date() {
        return Err(DriftError::TypeMismatch(
            "`start` and `end` must both be dates or both be date-times".to_string(),
        ));
    }
    if *start > *end {
        return Err(DriftError::OrderingViolation(format!(
            "`start` ({start}) must be <= `end` ({end})"
        )));
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> TimeValue {
        TimeValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32) -> TimeValue {
        let offset = FixedOffset::east_opt(0).unwrap();
        TimeValue::DateTime(offset.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    #[test]
    fn test_ascending_day_steps() {
        let sequence = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 10),
            &Offset::days(3),
            true,
        )
        .unwrap();
        assert_eq!(
            sequence,
            [date(2023, 1, 1), date(2023, 1, 4), date(2023, 1, 7), date(2023, 1, 10)],
        );
    }

    #[test]
    fn test_descending_seeds_from_end_but_returns_ascending() {
        // 9 days at a 3-day step from the end: every value lands on the
        // grid anchored at `end`, so the start boundary itself appears.
        let sequence = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 10),
            &Offset::days(3),
            false,
        )
        .unwrap();
        assert_eq!(
            sequence,
            [date(2023, 1, 1), date(2023, 1, 4), date(2023, 1, 7), date(2023, 1, 10)],
        );
    }

    #[test]
    fn test_direction_decides_which_boundary_survives() {
        // 8 days at a 3-day step: the grid cannot hit both boundaries.
        let ascending = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 9),
            &Offset::days(3),
            true,
        )
        .unwrap();
        assert_eq!(
            ascending,
            [date(2023, 1, 1), date(2023, 1, 4), date(2023, 1, 7)],
        );

        let descending = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 9),
            &Offset::days(3),
            false,
        )
        .unwrap();
        assert_eq!(
            descending,
            [date(2023, 1, 3), date(2023, 1, 6), date(2023, 1, 9)],
        );
    }

    #[test]
    fn test_equal_bounds_yield_single_value() {
        let sequence = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 1),
            &Offset::days(1),
            true,
        )
        .unwrap();
        assert_eq!(sequence, [date(2023, 1, 1)]);
    }

    #[test]
    fn test_datetime_hour_steps() {
        let sequence = generate(
            &datetime(1996, 1, 1, 0),
            &datetime(1996, 1, 3, 8),
            &Offset::hours(8),
            true,
        )
        .unwrap();
        assert_eq!(sequence.len(), 8); // 56 hours / 8 = 7 steps + seed
        assert_eq!(sequence[0], datetime(1996, 1, 1, 0));
        assert_eq!(sequence[7], datetime(1996, 1, 3, 8));
    }

    #[test]
    fn test_monthly_steps_clamp_and_stay_in_bounds() {
        let sequence = generate(
            &date(2021, 1, 31),
            &date(2021, 5, 31),
            &Offset::months(1),
            true,
        )
        .unwrap();
        assert_eq!(
            sequence,
            [
                date(2021, 1, 31),
                date(2021, 2, 28),
                date(2021, 3, 28),
                date(2021, 4, 28),
                date(2021, 5, 28),
            ],
        );
    }

    #[test]
    fn test_strings_use_canonical_format() {
        let text = generate_strings(
            &date(2023, 1, 1),
            &date(2023, 1, 10),
            &Offset::days(3),
            true,
        )
        .unwrap();
        assert_eq!(text, ["2023-01-01", "2023-01-04", "2023-01-07", "2023-01-10"]);
    }

    #[test]
    fn test_mixed_variants_are_rejected() {
        let err = generate(
            &date(2023, 1, 1),
            &datetime(2023, 1, 10, 0),
            &Offset::days(1),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, DriftError::TypeMismatch(_)), "got: {err}");
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = generate(
            &date(2023, 1, 10),
            &date(2023, 1, 1),
            &Offset::days(1),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, DriftError::OrderingViolation(_)), "got: {err}");
    }

    #[test]
    fn test_zero_offset_is_rejected() {
        let err = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 10),
            &Offset::default(),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, DriftError::InvalidArgument(_)), "got: {err}");
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let err = generate(
            &date(2023, 1, 1),
            &date(2023, 1, 10),
            &Offset::days(-1),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, DriftError::InvalidArgument(_)), "got: {err}");
    }
}
