//! Slip availability checking.
//!
//! This module decides whether a candidate date range can be booked on a
//! slip given the slip's existing reservations. Only confirmed reservations
//! hold a slip; pending and cancelled ones never block a candidate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{AuditStep, DateRange, Reservation};

/// The result of checking a candidate range against a slip's reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// True when no confirmed reservation on the slip overlaps the range.
    pub available: bool,
    /// Identifiers of the confirmed reservations that overlap.
    pub conflicts: Vec<String>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Half-open interval overlap: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && s2 < e1`.
///
/// A checkout on the same day as another check-in is not an overlap.
///
/// # Example
///
/// ```
/// use dock_booking_engine::calculation::ranges_overlap;
/// use dock_booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
/// let stay = DateRange::new(d(22), d(24)).unwrap();
/// let turnover = DateRange::new(d(24), d(26)).unwrap();
/// let clash = DateRange::new(d(23), d(25)).unwrap();
///
/// assert!(!ranges_overlap(&stay, &turnover));
/// assert!(ranges_overlap(&stay, &clash));
/// ```
pub fn ranges_overlap(a: &DateRange, b: &DateRange) -> bool {
    a.overlaps(b)
}

/// Returns the confirmed reservations whose range overlaps `candidate`.
///
/// Reservations are returned in input order. The slip identifier is not
/// consulted; callers pass one slip's reservations.
pub fn find_conflicts<'a>(
    candidate: &DateRange,
    existing: &'a [Reservation],
) -> Vec<&'a Reservation> {
    existing
        .iter()
        .filter(|r| r.blocks_availability())
        .filter(|r| ranges_overlap(candidate, &r.range))
        .collect()
}

/// Returns true if no confirmed reservation overlaps `candidate`.
///
/// An empty reservation list is always available. A confirmed reservation
/// with exactly the candidate's range is a conflict.
///
/// # Example
///
/// ```
/// use dock_booking_engine::calculation::is_available;
/// use dock_booking_engine::models::{DateRange, OccupantClass, Reservation, ReservationStatus};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
/// let existing = vec![Reservation {
///     id: "res_001".to_string(),
///     slip_id: "slip_a1".to_string(),
///     range: DateRange::new(d(22), d(24)).unwrap(),
///     status: ReservationStatus::Confirmed,
///     occupant_class: OccupantClass::Renter,
/// }];
///
/// assert!(is_available(&DateRange::new(d(24), d(26)).unwrap(), &existing));
/// assert!(!is_available(&DateRange::new(d(23), d(25)).unwrap(), &existing));
/// ```
pub fn is_available(candidate: &DateRange, existing: &[Reservation]) -> bool {
    !existing
        .iter()
        .any(|r| r.blocks_availability() && ranges_overlap(candidate, &r.range))
}

/// Checks a candidate range on one slip and records the decision.
///
/// Reservations belonging to other slips are ignored, so callers may pass a
/// marina-wide list.
///
/// # Arguments
///
/// * `slip_id` - The slip being booked
/// * `candidate` - The requested nights
/// * `existing` - Known reservations, any slip, any status
/// * `step_number` - The step number for audit trail sequencing
pub fn check_availability(
    slip_id: &str,
    candidate: &DateRange,
    existing: &[Reservation],
    step_number: u32,
) -> AvailabilityResult {
    let on_slip: Vec<Reservation> = existing
        .iter()
        .filter(|r| r.slip_id == slip_id)
        .cloned()
        .collect();
    let confirmed_count = on_slip.iter().filter(|r| r.blocks_availability()).count();

    let conflicts: Vec<String> = find_conflicts(candidate, &on_slip)
        .into_iter()
        .map(|r| r.id.clone())
        .collect();
    let available = conflicts.is_empty();

    debug!(
        slip_id,
        candidate = %candidate,
        confirmed = confirmed_count,
        conflicts = conflicts.len(),
        "Checked slip availability"
    );

    let reasoning = if available {
        format!(
            "{} is free on slip {} ({} confirmed reservation(s) checked)",
            candidate, slip_id, confirmed_count
        )
    } else {
        format!(
            "{} overlaps confirmed reservation(s) {} on slip {}",
            candidate,
            conflicts.join(", "),
            slip_id
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "availability".to_string(),
        rule_name: "Slip Availability".to_string(),
        input: serde_json::json!({
            "slip_id": slip_id,
            "start": candidate.start().to_string(),
            "end": candidate.end().to_string(),
            "reservations_on_slip": on_slip.len(),
            "confirmed_on_slip": confirmed_count
        }),
        output: serde_json::json!({
            "available": available,
            "conflicts": conflicts
        }),
        reasoning,
    };

    AvailabilityResult {
        available,
        conflicts,
        audit_step,
    }
}
