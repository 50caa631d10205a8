//! Booking quotes.
//!
//! This module composes the availability check, stay pricing, and fee
//! exemption into the quote the booking flow acts on. The steps run in
//! that order and each one is recorded in the quote's audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::BookingPolicy;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, BookingQuote, DateRange, OccupantClass, Reservation};

use super::{check_availability, compute_total_with_policy, pricing_audit_step};

/// Quotes a candidate booking of `slip_id` over `range`.
///
/// An unavailable range is still priced; the quote is flagged
/// `available: false` and lists the conflicting reservations so the caller
/// can show why.
///
/// # Arguments
///
/// * `slip_id` - The slip being booked
/// * `range` - The requested nights
/// * `nightly_rate` - The slip's rate per night
/// * `occupant_class` - Who is booking
/// * `existing` - Known reservations; other slips are ignored
/// * `policy` - The marina's booking policy
///
/// # Examples
///
/// ```
/// use dock_booking_engine::calculation::quote_booking;
/// use dock_booking_engine::config::BookingPolicy;
/// use dock_booking_engine::models::{DateRange, OccupantClass};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 24).unwrap(),
/// )
/// .unwrap();
///
/// let quote = quote_booking(
///     "slip_a1",
///     range,
///     Decimal::from(35),
///     OccupantClass::Homeowner,
///     &[],
///     &BookingPolicy::default(),
/// )
/// .unwrap();
///
/// assert!(quote.available);
/// assert_eq!(quote.pricing.final_total, Decimal::from(70));
/// assert_eq!(quote.amount_due, Decimal::ZERO);
/// ```
pub fn quote_booking(
    slip_id: &str,
    range: DateRange,
    nightly_rate: Decimal,
    occupant_class: OccupantClass,
    existing: &[Reservation],
    policy: &BookingPolicy,
) -> EngineResult<BookingQuote> {
    let start_time = Instant::now();
    let mut trace = AuditTrace::default();

    let availability = check_availability(slip_id, &range, existing, trace.next_step_number());
    trace.steps.push(availability.audit_step);

    let pricing =
        compute_total_with_policy(&range, nightly_rate, occupant_class, policy.pricing())?;
    let pricing_step = pricing_audit_step(
        &range,
        nightly_rate,
        occupant_class,
        policy.pricing(),
        &pricing,
        trace.next_step_number(),
    );
    trace.steps.push(pricing_step);

    let amount_due = amount_due_for(pricing.final_total, occupant_class);
    let exemption_step = fee_exemption_audit_step(
        occupant_class,
        pricing.final_total,
        amount_due,
        trace.next_step_number(),
    );
    trace.steps.push(exemption_step);

    trace.duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        slip_id,
        available = availability.available,
        amount_due = %amount_due,
        duration_us = trace.duration_us,
        "Quoted booking"
    );

    Ok(BookingQuote {
        quote_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        slip_id: slip_id.to_string(),
        range,
        occupant_class,
        available: availability.available,
        conflicts: availability.conflicts,
        pricing,
        amount_due,
        audit_trace: trace,
    })
}

/// The amount actually charged: the priced total for renters, nothing for
/// fee-exempt classes.
pub fn amount_due_for(final_total: Decimal, occupant_class: OccupantClass) -> Decimal {
    if occupant_class.is_fee_exempt() {
        Decimal::ZERO
    } else {
        final_total
    }
}

fn fee_exemption_audit_step(
    occupant_class: OccupantClass,
    final_total: Decimal,
    amount_due: Decimal,
    step_number: u32,
) -> AuditStep {
    let exempt = occupant_class.is_fee_exempt();
    let reasoning = if exempt {
        format!(
            "{} bookings are fee exempt - ${} priced for the record, $0 due",
            occupant_class,
            final_total.normalize()
        )
    } else {
        format!(
            "Renter pays the priced total of ${}",
            final_total.normalize()
        )
    };

    AuditStep {
        step_number,
        rule_id: "fee_exemption".to_string(),
        rule_name: "Fee Exemption".to_string(),
        input: serde_json::json!({
            "occupant_class": occupant_class.as_str(),
            "final_total": final_total.normalize().to_string()
        }),
        output: serde_json::json!({
            "fee_exempt": exempt,
            "amount_due": amount_due.normalize().to_string()
        }),
        reasoning,
    }
}
