//! Cancellation refund policy.
//!
//! This module settles a cancelled reservation: how much of the total cost
//! is returned and how much is kept as a cancellation fee. The default
//! schedule, by whole days between cancellation and check-in:
//!
//! | days before check-in | refund | fee  |
//! |----------------------|--------|------|
//! | 7 or more            | 100%   | 0%   |
//! | 3 to 6               | 50%    | 50%  |
//! | 1 to 2               | 25%    | 75%  |
//! | 0 or fewer           | 0%     | 100% |
//!
//! Fee-exempt occupants were never charged and settle as exempt.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RefundPolicy;
use crate::error::EngineResult;
use crate::models::{AuditStep, OccupantClass, RefundResult, SettlementStatus, ensure_non_negative};

use super::{days_between, days_until};

/// Settles a cancellation made on `cancellation_date` under the default
/// schedule.
///
/// # Arguments
///
/// * `check_in` - The first night of the cancelled reservation
/// * `cancellation_date` - The day the cancellation was made
/// * `total_cost` - What the occupant paid, must not be negative
/// * `occupant_class` - Who held the reservation
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidAmount`] for a negative total.
///
/// # Examples
///
/// ```
/// use dock_booking_engine::calculation::compute_refund;
/// use dock_booking_engine::models::{OccupantClass, SettlementStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = compute_refund(
///     NaiveDate::from_ymd_opt(2025, 6, 22).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 17).unwrap(),
///     Decimal::from(300),
///     OccupantClass::Renter,
/// )
/// .unwrap();
///
/// assert_eq!(result.refund_amount, Decimal::from(150));
/// assert_eq!(result.cancellation_fee, Decimal::from(150));
/// assert_eq!(result.settlement_status, SettlementStatus::PartiallyRefunded);
/// ```
pub fn compute_refund(
    check_in: NaiveDate,
    cancellation_date: NaiveDate,
    total_cost: Decimal,
    occupant_class: OccupantClass,
) -> EngineResult<RefundResult> {
    compute_refund_with_policy(
        check_in,
        cancellation_date,
        total_cost,
        occupant_class,
        &RefundPolicy::default(),
    )
}

/// Settles a cancellation made on `cancellation_date` under `policy`.
pub fn compute_refund_with_policy(
    check_in: NaiveDate,
    cancellation_date: NaiveDate,
    total_cost: Decimal,
    occupant_class: OccupantClass,
    policy: &RefundPolicy,
) -> EngineResult<RefundResult> {
    let days = days_between(cancellation_date, check_in);
    settle(days, total_cost, occupant_class, policy)
}

/// Settles a cancellation made at the instant `cancelled_at`.
///
/// Days until check-in are floored, so a cancellation at 09:00 five days
/// before check-in falls in the four-day bucket.
pub fn compute_refund_at(
    check_in: NaiveDate,
    cancelled_at: NaiveDateTime,
    total_cost: Decimal,
    occupant_class: OccupantClass,
    policy: &RefundPolicy,
) -> EngineResult<RefundResult> {
    let days = days_until(cancelled_at, check_in);
    settle(days, total_cost, occupant_class, policy)
}

fn settle(
    days_until_check_in: i64,
    total_cost: Decimal,
    occupant_class: OccupantClass,
    policy: &RefundPolicy,
) -> EngineResult<RefundResult> {
    let total_cost = ensure_non_negative("total_cost", total_cost)?;

    if occupant_class.is_fee_exempt() {
        debug!(occupant_class = %occupant_class, "Cancellation is fee exempt");
        return Ok(RefundResult {
            refund_amount: Decimal::ZERO,
            cancellation_fee: Decimal::ZERO,
            settlement_status: SettlementStatus::Exempt,
            days_until_check_in,
        });
    }

    let refund_amount = total_cost * policy.refund_fraction_for(days_until_check_in);
    let cancellation_fee = total_cost - refund_amount;
    let settlement_status = settlement_status_for(refund_amount, total_cost);

    debug!(
        days_until_check_in,
        total_cost = %total_cost,
        refund_amount = %refund_amount,
        status = settlement_status.as_str(),
        "Settled cancellation"
    );

    Ok(RefundResult {
        refund_amount,
        cancellation_fee,
        settlement_status,
        days_until_check_in,
    })
}

/// Classifies a non-exempt settlement by how much of the total is returned.
///
/// A zero-cost booking refunds nothing and is therefore non-refundable.
pub fn settlement_status_for(refund_amount: Decimal, total_cost: Decimal) -> SettlementStatus {
    SettlementStatus::for_amounts(refund_amount, total_cost)
}

/// Records a settlement decision as an audit step.
pub fn refund_audit_step(
    total_cost: Decimal,
    occupant_class: OccupantClass,
    policy: &RefundPolicy,
    result: &RefundResult,
    step_number: u32,
) -> AuditStep {
    let days = result.days_until_check_in;
    let (tier_label, reasoning) = if result.settlement_status == SettlementStatus::Exempt {
        (
            "exempt".to_string(),
            format!(
                "No refund or fee - {} bookings are never charged",
                occupant_class
            ),
        )
    } else {
        match policy.tier_for(days) {
            Some(tier) => (
                format!(">= {} days", tier.min_days_before),
                format!(
                    "Cancelled {} day(s) before check-in: {}% of ${} refunded (${}), fee ${}",
                    days,
                    (tier.refund_fraction * Decimal::ONE_HUNDRED).normalize(),
                    total_cost.normalize(),
                    result.refund_amount.normalize(),
                    result.cancellation_fee.normalize()
                ),
            ),
            None => (
                "below lowest tier".to_string(),
                format!(
                    "Cancelled {} day(s) before check-in: no refund, fee ${}",
                    days,
                    result.cancellation_fee.normalize()
                ),
            ),
        }
    };

    AuditStep {
        step_number,
        rule_id: "cancellation_refund".to_string(),
        rule_name: "Cancellation Refund".to_string(),
        input: serde_json::json!({
            "days_until_check_in": days,
            "total_cost": total_cost.normalize().to_string(),
            "occupant_class": occupant_class.as_str()
        }),
        output: serde_json::json!({
            "tier": tier_label,
            "refund_amount": result.refund_amount.normalize().to_string(),
            "cancellation_fee": result.cancellation_fee.normalize().to_string(),
            "settlement_status": result.settlement_status.as_str()
        }),
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::Duration;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn check_in() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 22).unwrap()
    }

    fn cancel_days_before(days: i64, total: &str, class: OccupantClass) -> RefundResult {
        compute_refund(check_in(), check_in() - Duration::days(days), dec(total), class).unwrap()
    }

    fn assert_sums_to_total(result: &RefundResult, total: &str) {
        assert_eq!(result.refund_amount + result.cancellation_fee, dec(total));
    }

    /// RF-001: 5 days out, $300
    #[test]
    fn test_five_days_out_refunds_half() {
        let result = cancel_days_before(5, "300", OccupantClass::Renter);

        assert_eq!(result.refund_amount, dec("150"));
        assert_eq!(result.cancellation_fee, dec("150"));
        assert_eq!(result.settlement_status, SettlementStatus::PartiallyRefunded);
        assert_eq!(result.days_until_check_in, 5);
    }

    /// RF-002: tier boundaries are inclusive on the lower bound
    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (30, "100", "0", SettlementStatus::Refunded),
            (7, "100", "0", SettlementStatus::Refunded),
            (6, "50", "50", SettlementStatus::PartiallyRefunded),
            (3, "50", "50", SettlementStatus::PartiallyRefunded),
            (2, "25", "75", SettlementStatus::PartiallyRefunded),
            (1, "25", "75", SettlementStatus::PartiallyRefunded),
            (0, "0", "100", SettlementStatus::NonRefundable),
            (-4, "0", "100", SettlementStatus::NonRefundable),
        ];

        for (days, refund, fee, status) in cases {
            let result = cancel_days_before(days, "100", OccupantClass::Renter);
            assert_eq!(result.refund_amount, dec(refund), "refund at {} days", days);
            assert_eq!(result.cancellation_fee, dec(fee), "fee at {} days", days);
            assert_eq!(result.settlement_status, status, "status at {} days", days);
            assert_sums_to_total(&result, "100");
        }
    }

    /// RF-003: homeowner cancels same day with no cost
    #[test]
    fn test_homeowner_same_day_is_exempt() {
        let result = cancel_days_before(0, "0", OccupantClass::Homeowner);

        assert_eq!(result.refund_amount, Decimal::ZERO);
        assert_eq!(result.cancellation_fee, Decimal::ZERO);
        assert_eq!(result.settlement_status, SettlementStatus::Exempt);
    }

    #[test]
    fn test_exempt_classes_ignore_cost_and_timing() {
        for class in [
            OccupantClass::Homeowner,
            OccupantClass::Admin,
            OccupantClass::Superadmin,
        ] {
            for days in [-2, 0, 2, 5, 10] {
                let result = cancel_days_before(days, "480.00", class);
                assert_eq!(result.refund_amount, Decimal::ZERO);
                assert_eq!(result.cancellation_fee, Decimal::ZERO);
                assert_eq!(result.settlement_status, SettlementStatus::Exempt);
            }
        }
    }

    #[test]
    fn test_zero_cost_renter_is_non_refundable() {
        let result = cancel_days_before(10, "0", OccupantClass::Renter);
        assert_eq!(result.settlement_status, SettlementStatus::NonRefundable);
        assert_sums_to_total(&result, "0");
    }

    #[test]
    fn test_odd_cents_keep_sum_exact() {
        let result = cancel_days_before(2, "100.01", OccupantClass::Renter);
        assert_eq!(result.refund_amount, dec("25.0025"));
        assert_sums_to_total(&result, "100.01");

        let rounded = result.rounded();
        assert_eq!(rounded.refund_amount, dec("25.00"));
        assert_eq!(rounded.cancellation_fee, dec("75.01"));
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let result = compute_refund(check_in(), check_in(), dec("-10"), OccupantClass::Renter);
        match result {
            Err(EngineError::InvalidAmount { field, .. }) => assert_eq!(field, "total_cost"),
            _ => panic!("Expected InvalidAmount error"),
        }
    }

    #[test]
    fn test_refund_at_floors_partial_day() {
        let policy = RefundPolicy::default();
        // 7 days minus 9 hours is 6 whole days: half refund, not full
        let at = NaiveDateTime::parse_from_str("2025-06-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let result =
            compute_refund_at(check_in(), at, dec("200"), OccupantClass::Renter, &policy).unwrap();
        assert_eq!(result.days_until_check_in, 6);
        assert_eq!(result.refund_amount, dec("100"));

        let midnight =
            NaiveDateTime::parse_from_str("2025-06-15 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let result =
            compute_refund_at(check_in(), midnight, dec("200"), OccupantClass::Renter, &policy)
                .unwrap();
        assert_eq!(result.days_until_check_in, 7);
        assert_eq!(result.settlement_status, SettlementStatus::Refunded);
    }

    #[test]
    fn test_settlement_status_for() {
        assert_eq!(settlement_status_for(dec("0"), dec("50")), SettlementStatus::NonRefundable);
        assert_eq!(settlement_status_for(dec("50"), dec("50")), SettlementStatus::Refunded);
        assert_eq!(
            settlement_status_for(dec("12.5"), dec("50")),
            SettlementStatus::PartiallyRefunded
        );
    }

    #[test]
    fn test_audit_step_for_partial_refund() {
        let policy = RefundPolicy::default();
        let result = cancel_days_before(5, "300", OccupantClass::Renter);
        let step = refund_audit_step(dec("300"), OccupantClass::Renter, &policy, &result, 1);

        assert_eq!(step.rule_id, "cancellation_refund");
        assert_eq!(step.output["tier"].as_str().unwrap(), ">= 3 days");
        assert_eq!(step.output["settlement_status"].as_str().unwrap(), "partially_refunded");
        assert!(step.reasoning.contains("50% of $300 refunded ($150)"));
    }

    #[test]
    fn test_audit_step_below_lowest_tier() {
        let policy = RefundPolicy::default();
        let result = cancel_days_before(0, "80", OccupantClass::Renter);
        let step = refund_audit_step(dec("80"), OccupantClass::Renter, &policy, &result, 1);

        assert_eq!(step.output["tier"].as_str().unwrap(), "below lowest tier");
        assert!(step.reasoning.contains("no refund, fee $80"));
    }

    #[test]
    fn test_audit_step_for_exempt() {
        let policy = RefundPolicy::default();
        let result = cancel_days_before(0, "0", OccupantClass::Admin);
        let step = refund_audit_step(dec("0"), OccupantClass::Admin, &policy, &result, 1);

        assert_eq!(step.output["tier"].as_str().unwrap(), "exempt");
        assert!(step.reasoning.contains("admin bookings are never charged"));
    }
}
