//! Booking quote model.
//!
//! A [`BookingQuote`] is what the booking flow hands to the payment side:
//! whether the slip is free, what the stay costs, and what is actually due
//! once fee exemption is taken into account.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, DateRange, OccupantClass, PricingResult};

/// The complete result of quoting a candidate booking.
///
/// `amount_due` is `pricing.final_total` for renters and zero for
/// fee-exempt occupant classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingQuote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The slip being booked.
    pub slip_id: String,
    /// The requested nights.
    pub range: DateRange,
    /// Who is booking.
    pub occupant_class: OccupantClass,
    /// Whether no confirmed reservation overlaps the range.
    pub available: bool,
    /// Identifiers of confirmed reservations that overlap the range.
    pub conflicts: Vec<String>,
    /// The computed price of the stay.
    pub pricing: PricingResult,
    /// The amount to charge.
    pub amount_due: Decimal,
    /// Every rule applied while producing the quote.
    pub audit_trace: AuditTrace,
}
