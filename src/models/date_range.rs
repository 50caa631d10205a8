//! Date range model.
//!
//! This module defines [`DateRange`], the half-open span of calendar days a
//! reservation occupies a slip: the check-in day is included and the
//! checkout day is not.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::normalize_to_day;
use crate::error::{EngineError, EngineResult};

/// A half-open range of calendar days `[start, end)`.
///
/// The `end` date is the checkout day and is never occupied, which lets one
/// guest leave on the same day the next guest arrives. A `DateRange` can only
/// be built with `end` strictly after `start`, so every range covers at least
/// one night.
///
/// # Example
///
/// ```
/// use dock_booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 24).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(range.nights(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Unvalidated wire shape of a [`DateRange`].
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = EngineError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a range, rejecting ranges of zero or negative nights.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `end <= start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from timestamps, discarding the time of day first.
    ///
    /// ```
    /// use dock_booking_engine::models::DateRange;
    /// use chrono::NaiveDateTime;
    ///
    /// let check_in = NaiveDateTime::parse_from_str("2025-06-22 15:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let check_out = NaiveDateTime::parse_from_str("2025-06-24 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let range = DateRange::from_datetimes(check_in, check_out).unwrap();
    /// assert_eq!(range.nights(), 2);
    /// ```
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        Self::new(normalize_to_day(start), normalize_to_day(end))
    }

    /// The check-in day (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The checkout day (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of nights covered; always at least one.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Returns true if the slip is occupied on `date` under this range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Half-open overlap test: `[s1, e1)` and `[s2, e2)` overlap iff
    /// `s1 < e2 && s2 < e1`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
