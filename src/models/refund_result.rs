//! Refund result model.
//!
//! This module defines the outcome of settling a cancelled reservation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_to_cents;

/// The categorical outcome of a cancellation's money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// The occupant was never charged, so nothing moves.
    Exempt,
    /// The full amount paid is returned.
    Refunded,
    /// Part of the amount paid is returned.
    PartiallyRefunded,
    /// Nothing is returned.
    NonRefundable,
}

impl SettlementStatus {
    /// The wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            SettlementStatus::Exempt => "exempt",
            SettlementStatus::Refunded => "refunded",
            SettlementStatus::PartiallyRefunded => "partially_refunded",
            SettlementStatus::NonRefundable => "non_refundable",
        }
    }

    /// Classifies a non-exempt settlement by how much of the total is
    /// returned. Nothing returned is non-refundable, even on a zero total.
    pub fn for_amounts(refund_amount: Decimal, total_cost: Decimal) -> Self {
        if refund_amount.is_zero() {
            SettlementStatus::NonRefundable
        } else if refund_amount == total_cost {
            SettlementStatus::Refunded
        } else {
            SettlementStatus::PartiallyRefunded
        }
    }
}

/// The settlement of a cancelled reservation.
///
/// For non-exempt occupants `refund_amount + cancellation_fee` equals the
/// original total cost. For exempt occupants both are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundResult {
    /// Amount returned to the occupant.
    pub refund_amount: Decimal,
    /// Amount retained by the marina.
    pub cancellation_fee: Decimal,
    /// Outcome category.
    pub settlement_status: SettlementStatus,
    /// Whole days between cancellation and check-in, floored.
    pub days_until_check_in: i64,
}

impl RefundResult {
    /// Returns a copy with amounts rounded to cents.
    ///
    /// Only the refund and the total are rounded. The fee is what the rounded
    /// total leaves after the rounded refund, so the two still sum to the
    /// amount paid, and the status is reclassified from the rounded refund.
    pub fn rounded(&self) -> Self {
        if self.settlement_status == SettlementStatus::Exempt {
            return self.clone();
        }

        let total_cost = round_to_cents(self.refund_amount + self.cancellation_fee);
        let refund_amount = round_to_cents(self.refund_amount);

        Self {
            refund_amount,
            cancellation_fee: total_cost - refund_amount,
            settlement_status: SettlementStatus::for_amounts(refund_amount, total_cost),
            days_until_check_in: self.days_until_check_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_settlement_status_serialization() {
        assert_eq!(
            serde_json::to_string(&SettlementStatus::PartiallyRefunded).unwrap(),
            "\"partially_refunded\""
        );
        assert_eq!(
            serde_json::to_string(&SettlementStatus::NonRefundable).unwrap(),
            "\"non_refundable\""
        );
        let status: SettlementStatus = serde_json::from_str("\"exempt\"").unwrap();
        assert_eq!(status, SettlementStatus::Exempt);
    }

    #[test]
    fn test_as_str_matches_serde_names() {
        for status in [
            SettlementStatus::Exempt,
            SettlementStatus::Refunded,
            SettlementStatus::PartiallyRefunded,
            SettlementStatus::NonRefundable,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_refund_result_deserialization() {
        let json = r#"{
            "refund_amount": "150.00",
            "cancellation_fee": "150.00",
            "settlement_status": "partially_refunded",
            "days_until_check_in": 5
        }"#;

        let result: RefundResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.refund_amount, dec("150.00"));
        assert_eq!(result.settlement_status, SettlementStatus::PartiallyRefunded);
        assert_eq!(result.days_until_check_in, 5);
    }

    #[test]
    fn test_rounded_keeps_partial_status() {
        let result = RefundResult {
            refund_amount: dec("25.0025"),
            cancellation_fee: dec("75.0075"),
            settlement_status: SettlementStatus::PartiallyRefunded,
            days_until_check_in: 2,
        };
        let rounded = result.rounded();
        assert_eq!(rounded.refund_amount, dec("25.00"));
        assert_eq!(rounded.cancellation_fee, dec("75.01"));
        assert_eq!(rounded.settlement_status, SettlementStatus::PartiallyRefunded);
    }

    fn partial(refund: &str, fee: &str) -> RefundResult {
        RefundResult {
            refund_amount: dec(refund),
            cancellation_fee: dec(fee),
            settlement_status: SettlementStatus::PartiallyRefunded,
            days_until_check_in: 2,
        }
    }

    #[test]
    fn test_rounded_fee_is_derived_from_rounded_refund() {
        // 25% of a $0.10 total
        let rounded = partial("0.025", "0.075").rounded();
        assert_eq!(rounded.refund_amount, dec("0.03"));
        assert_eq!(rounded.cancellation_fee, dec("0.07"));
        assert_eq!(rounded.refund_amount + rounded.cancellation_fee, dec("0.10"));
    }

    #[test]
    fn test_rounded_refund_of_zero_is_non_refundable() {
        // 25% of a $0.01 total
        let rounded = partial("0.0025", "0.0075").rounded();
        assert_eq!(rounded.refund_amount, Decimal::ZERO);
        assert_eq!(rounded.cancellation_fee, dec("0.01"));
        assert_eq!(rounded.settlement_status, SettlementStatus::NonRefundable);
    }

    #[test]
    fn test_rounded_exempt_is_unchanged() {
        let exempt = RefundResult {
            refund_amount: Decimal::ZERO,
            cancellation_fee: Decimal::ZERO,
            settlement_status: SettlementStatus::Exempt,
            days_until_check_in: 0,
        };
        assert_eq!(exempt.rounded(), exempt);
    }

    #[test]
    fn test_for_amounts() {
        assert_eq!(
            SettlementStatus::for_amounts(dec("10"), dec("10")),
            SettlementStatus::Refunded
        );
        assert_eq!(
            SettlementStatus::for_amounts(dec("5"), dec("10")),
            SettlementStatus::PartiallyRefunded
        );
        assert_eq!(
            SettlementStatus::for_amounts(Decimal::ZERO, Decimal::ZERO),
            SettlementStatus::NonRefundable
        );
    }
}
