//! Stay pricing.
//!
//! This module computes the nightly-rate cost of a stay and applies the
//! long-stay discount. A renter booking exactly the long-stay night count
//! (30 by default) receives the discount; 29 or 31 nights do not. This is
//! an exact match, not a threshold. Fee-exempt classes are priced as
//! renters.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PricingPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, DateRange, OccupantClass, PricingResult, ensure_non_negative};

use super::night_count;

/// Computes the cost of a stay under the default pricing policy.
///
/// # Arguments
///
/// * `range` - The nights being booked
/// * `nightly_rate` - The slip's rate per night, must not be negative
/// * `occupant_class` - Who is booking
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`] for a negative nightly rate.
///
/// # Examples
///
/// ```
/// use dock_booking_engine::calculation::compute_total;
/// use dock_booking_engine::models::{DateRange, OccupantClass};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
/// )
/// .unwrap();
///
/// let result = compute_total(&range, Decimal::from(20), OccupantClass::Renter).unwrap();
/// assert_eq!(result.base_total, Decimal::from(600));
/// assert_eq!(result.discount, Decimal::from(240));
/// assert_eq!(result.final_total, Decimal::from(360));
/// assert!(result.discount_applied);
/// ```
pub fn compute_total(
    range: &DateRange,
    nightly_rate: Decimal,
    occupant_class: OccupantClass,
) -> EngineResult<PricingResult> {
    compute_total_with_policy(range, nightly_rate, occupant_class, &PricingPolicy::default())
}

/// Computes the cost of a stay under the given pricing policy.
///
/// Fee-exempt classes are priced as if they were renters, long-stay
/// discount included. The figures are informational; the booking flow sets
/// their amount due to zero separately.
pub fn compute_total_with_policy(
    range: &DateRange,
    nightly_rate: Decimal,
    occupant_class: OccupantClass,
    policy: &PricingPolicy,
) -> EngineResult<PricingResult> {
    let nightly_rate = ensure_non_negative("nightly_rate", nightly_rate)?;
    let nights = night_count(range);

    let base_total = Decimal::from(nights)
        .checked_mul(nightly_rate)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("base total overflowed for {} nights at {}", nights, nightly_rate),
        })?;

    let priced_as = if occupant_class.is_fee_exempt() {
        OccupantClass::Renter
    } else {
        occupant_class
    };
    let discount_applied = qualifies_for_long_stay(nights, priced_as, policy);
    let discount = if discount_applied {
        base_total * policy.long_stay_discount
    } else {
        Decimal::ZERO
    };

    debug!(
        nights,
        nightly_rate = %nightly_rate,
        occupant_class = %occupant_class,
        discount_applied,
        "Priced stay"
    );

    Ok(PricingResult {
        night_count: nights,
        base_total,
        discount,
        final_total: base_total - discount,
        discount_applied,
    })
}

/// Returns true when a stay earns the long-stay discount.
pub fn qualifies_for_long_stay(
    nights: i64,
    occupant_class: OccupantClass,
    policy: &PricingPolicy,
) -> bool {
    occupant_class == OccupantClass::Renter && nights == policy.long_stay_nights
}

/// Records a pricing decision as an audit step.
pub fn pricing_audit_step(
    range: &DateRange,
    nightly_rate: Decimal,
    occupant_class: OccupantClass,
    policy: &PricingPolicy,
    result: &PricingResult,
    step_number: u32,
) -> AuditStep {
    let reasoning = if result.discount_applied {
        format!(
            "{} nights x ${} = ${}; exactly {} nights at renter rates earns {}% off (${}) = ${}",
            result.night_count,
            nightly_rate.normalize(),
            result.base_total.normalize(),
            policy.long_stay_nights,
            (policy.long_stay_discount * Decimal::ONE_HUNDRED).normalize(),
            result.discount.normalize(),
            result.final_total.normalize()
        )
    } else {
        format!(
            "{} nights x ${} = ${}; no long-stay discount ({} booking, requires exactly {} nights)",
            result.night_count,
            nightly_rate.normalize(),
            result.final_total.normalize(),
            occupant_class,
            policy.long_stay_nights
        )
    };

    AuditStep {
        step_number,
        rule_id: "stay_pricing".to_string(),
        rule_name: "Stay Pricing".to_string(),
        input: serde_json::json!({
            "start": range.start().to_string(),
            "end": range.end().to_string(),
            "nightly_rate": nightly_rate.normalize().to_string(),
            "occupant_class": occupant_class.as_str()
        }),
        output: serde_json::json!({
            "night_count": result.night_count,
            "base_total": result.base_total.normalize().to_string(),
            "discount": result.discount.normalize().to_string(),
            "final_total": result.final_total.normalize().to_string(),
            "discount_applied": result.discount_applied
        }),
        reasoning,
    }
}
