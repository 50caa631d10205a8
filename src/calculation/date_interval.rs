//! Day-granularity date arithmetic.
//!
//! All booking comparisons happen on calendar days. Timestamps are reduced
//! to their date before any range is built, so the time of day can never
//! shift a night count or an overlap by one.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::DateRange;

const SECONDS_PER_DAY: i64 = 86_400;

/// Reduces a timestamp to the calendar day it falls on.
///
/// ```
/// use dock_booking_engine::calculation::normalize_to_day;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let late = NaiveDateTime::parse_from_str("2025-06-22 23:59:59", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(normalize_to_day(late), NaiveDate::from_ymd_opt(2025, 6, 22).unwrap());
/// ```
pub fn normalize_to_day(datetime: NaiveDateTime) -> NaiveDate {
    datetime.date()
}

/// Number of nights in a range: whole-day subtraction of checkout minus
/// check-in.
pub fn night_count(range: &DateRange) -> i64 {
    range.nights()
}

/// Whole days from one calendar day to another; negative when `to` is
/// earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Whole days from an instant until the start of `day`, floored.
///
/// A partial day counts against the caller: cancelling at 09:00 five days
/// before check-in leaves four whole days. Past the start of `day` the
/// result is negative.
///
/// ```
/// use dock_booking_engine::calculation::days_until;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let check_in = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
/// let at = NaiveDateTime::parse_from_str("2025-06-17 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_until(at, check_in), 4);
///
/// let midnight = NaiveDateTime::parse_from_str("2025-06-17 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_until(midnight, check_in), 5);
/// ```
pub fn days_until(from: NaiveDateTime, day: NaiveDate) -> i64 {
    let start_of_day = day.and_time(chrono::NaiveTime::MIN);
    (start_of_day - from).num_seconds().div_euclid(SECONDS_PER_DAY)
}
