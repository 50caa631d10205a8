//! Request types for the Dock Booking Engine API.
//!
//! This module defines the JSON request structures for the `/availability`,
//! `/quote`, and `/refund` endpoints.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DateRange, OccupantClass, Reservation};

/// Request body for the `/availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// The slip being checked.
    pub slip_id: String,
    /// The requested nights.
    pub candidate: DateRange,
    /// Known reservations. Those for other slips are ignored.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The slip being booked.
    pub slip_id: String,
    /// The requested nights.
    pub range: DateRange,
    /// The slip's rate per night.
    pub nightly_rate: Decimal,
    /// Who is booking.
    pub occupant_class: OccupantClass,
    /// Known reservations. Those for other slips are ignored.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// Request body for the `/refund` endpoint.
///
/// Exactly one of `cancellation_date` and `cancelled_at` must be given.
/// With `cancelled_at`, partial days before check-in are floored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    /// First night of the cancelled reservation.
    pub check_in: NaiveDate,
    /// The day the cancellation was made.
    #[serde(default)]
    pub cancellation_date: Option<NaiveDate>,
    /// The instant the cancellation was made.
    #[serde(default)]
    pub cancelled_at: Option<NaiveDateTime>,
    /// What the occupant paid.
    pub total_cost: Decimal,
    /// Who held the reservation.
    pub occupant_class: OccupantClass,
}

/// When a refund request says the cancellation happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationTime {
    /// A calendar day.
    Date(NaiveDate),
    /// A precise instant.
    Instant(NaiveDateTime),
}

impl RefundRequest {
    /// Resolves the cancellation time, or describes why it is ambiguous.
    pub fn cancellation_time(&self) -> Result<CancellationTime, String> {
        match (self.cancellation_date, self.cancelled_at) {
            (Some(date), None) => Ok(CancellationTime::Date(date)),
            (None, Some(at)) => Ok(CancellationTime::Instant(at)),
            (Some(_), Some(_)) => {
                Err("provide only one of 'cancellation_date' and 'cancelled_at'".to_string())
            }
            (None, None) => {
                Err("one of 'cancellation_date' or 'cancelled_at' is required".to_string())
            }
        }
    }
}
