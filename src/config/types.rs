//! Configuration types for booking policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, together with the
//! validated policies the calculations consume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Nights a renter must book, exactly, to receive the long-stay discount.
pub const DEFAULT_LONG_STAY_NIGHTS: i64 = 30;

/// Fraction taken off the base total of a qualifying long stay (40%).
pub const DEFAULT_LONG_STAY_DISCOUNT: Decimal = Decimal::from_parts(4, 0, 0, false, 1);

/// Metadata about the marina whose policy is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarinaMetadata {
    /// Display name of the marina.
    pub name: String,
    /// ISO 4217 currency code amounts are quoted in.
    pub currency: String,
    /// The version or effective date of the policy.
    pub version: String,
}

impl Default for MarinaMetadata {
    fn default() -> Self {
        Self {
            name: "Default Marina".to_string(),
            currency: "USD".to_string(),
            version: "builtin".to_string(),
        }
    }
}

/// Pricing rules, as read from `pricing.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// The exact night count that earns the discount. Not a threshold.
    pub long_stay_nights: i64,
    /// Fraction of the base total discounted, between 0 and 1.
    pub long_stay_discount: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            long_stay_nights: DEFAULT_LONG_STAY_NIGHTS,
            long_stay_discount: DEFAULT_LONG_STAY_DISCOUNT,
        }
    }
}

impl PricingPolicy {
    /// Checks that the discount is a fraction and the night count positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.long_stay_nights <= 0 {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "long_stay_nights must be positive, got {}",
                    self.long_stay_nights
                ),
            });
        }
        if !is_fraction(self.long_stay_discount) {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "long_stay_discount must be between 0 and 1, got {}",
                    self.long_stay_discount
                ),
            });
        }
        Ok(())
    }
}

/// One row of the cancellation schedule.
///
/// A cancellation made `min_days_before` or more whole days ahead of
/// check-in is refunded `refund_fraction` of the total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundTier {
    /// Lower bound (inclusive) on whole days before check-in.
    pub min_days_before: i64,
    /// Fraction of the total cost refunded, between 0 and 1.
    pub refund_fraction: Decimal,
}

/// The cancellation schedule file structure (`cancellation.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CancellationConfig {
    /// Tiers in any order; they are sorted when validated.
    pub tiers: Vec<RefundTier>,
}

/// A validated cancellation schedule.
///
/// Tiers are held sorted by `min_days_before`, highest first, and refund
/// fractions never increase as check-in approaches. Cancelling below the
/// lowest tier refunds nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefundPolicy {
    tiers: Vec<RefundTier>,
}

impl Default for RefundPolicy {
    fn default() -> Self {
        Self {
            tiers: vec![
                RefundTier {
                    min_days_before: 7,
                    refund_fraction: Decimal::ONE,
                },
                RefundTier {
                    min_days_before: 3,
                    refund_fraction: Decimal::new(5, 1),
                },
                RefundTier {
                    min_days_before: 1,
                    refund_fraction: Decimal::new(25, 2),
                },
            ],
        }
    }
}

impl RefundPolicy {
    /// Builds a schedule from tiers given in any order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when a fraction lies outside
    /// `[0, 1]`, two tiers share a bound, or a nearer tier refunds more than
    /// a farther one.
    ///
    /// # Example
    ///
    /// ```
    /// use dock_booking_engine::config::{RefundPolicy, RefundTier};
    /// use rust_decimal::Decimal;
    ///
    /// let policy = RefundPolicy::new(vec![
    ///     RefundTier { min_days_before: 2, refund_fraction: Decimal::new(5, 1) },
    ///     RefundTier { min_days_before: 14, refund_fraction: Decimal::ONE },
    /// ])
    /// .unwrap();
    /// assert_eq!(policy.refund_fraction_for(3), Decimal::new(5, 1));
    /// assert_eq!(policy.refund_fraction_for(1), Decimal::ZERO);
    /// ```
    pub fn new(mut tiers: Vec<RefundTier>) -> EngineResult<Self> {
        tiers.sort_by(|a, b| b.min_days_before.cmp(&a.min_days_before));

        for tier in &tiers {
            if !is_fraction(tier.refund_fraction) {
                return Err(EngineError::InvalidPolicy {
                    message: format!(
                        "refund_fraction for {} days must be between 0 and 1, got {}",
                        tier.min_days_before, tier.refund_fraction
                    ),
                });
            }
        }

        for pair in tiers.windows(2) {
            let (farther, nearer) = (&pair[0], &pair[1]);
            if farther.min_days_before == nearer.min_days_before {
                return Err(EngineError::InvalidPolicy {
                    message: format!(
                        "duplicate refund tier for {} days",
                        nearer.min_days_before
                    ),
                });
            }
            if nearer.refund_fraction > farther.refund_fraction {
                return Err(EngineError::InvalidPolicy {
                    message: format!(
                        "refund tiers must not increase closer to check-in: {} days refunds {} but {} days refunds {}",
                        nearer.min_days_before,
                        nearer.refund_fraction,
                        farther.min_days_before,
                        farther.refund_fraction
                    ),
                });
            }
        }

        Ok(Self { tiers })
    }

    /// The tiers, highest `min_days_before` first.
    pub fn tiers(&self) -> &[RefundTier] {
        &self.tiers
    }

    /// Returns the first tier whose lower bound `days_until_check_in` meets.
    pub fn tier_for(&self, days_until_check_in: i64) -> Option<&RefundTier> {
        self.tiers
            .iter()
            .find(|tier| days_until_check_in >= tier.min_days_before)
    }

    /// Fraction of the total refunded for a cancellation this many days out.
    pub fn refund_fraction_for(&self, days_until_check_in: i64) -> Decimal {
        self.tier_for(days_until_check_in)
            .map_or(Decimal::ZERO, |tier| tier.refund_fraction)
    }
}

/// The complete booking policy loaded from YAML files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingPolicy {
    /// Marina metadata.
    metadata: MarinaMetadata,
    /// Pricing rules.
    pricing: PricingPolicy,
    /// Cancellation schedule.
    refund: RefundPolicy,
}

impl BookingPolicy {
    /// Creates a new BookingPolicy from its component parts.
    pub fn new(metadata: MarinaMetadata, pricing: PricingPolicy, refund: RefundPolicy) -> Self {
        Self {
            metadata,
            pricing,
            refund,
        }
    }

    /// Returns the marina metadata.
    pub fn marina(&self) -> &MarinaMetadata {
        &self.metadata
    }

    /// Returns the pricing rules.
    pub fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Returns the cancellation schedule.
    pub fn refund(&self) -> &RefundPolicy {
        &self.refund
    }
}

fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(min_days_before: i64, fraction: &str) -> RefundTier {
        RefundTier {
            min_days_before,
            refund_fraction: dec(fraction),
        }
    }

    #[test]
    fn test_default_long_stay_discount_is_forty_percent() {
        assert_eq!(DEFAULT_LONG_STAY_DISCOUNT, dec("0.4"));
        assert_eq!(PricingPolicy::default().long_stay_nights, 30);
    }

    #[test]
    fn test_default_refund_schedule() {
        let policy = RefundPolicy::default();
        assert_eq!(policy.refund_fraction_for(30), dec("1"));
        assert_eq!(policy.refund_fraction_for(7), dec("1"));
        assert_eq!(policy.refund_fraction_for(6), dec("0.5"));
        assert_eq!(policy.refund_fraction_for(3), dec("0.5"));
        assert_eq!(policy.refund_fraction_for(2), dec("0.25"));
        assert_eq!(policy.refund_fraction_for(1), dec("0.25"));
        assert_eq!(policy.refund_fraction_for(0), dec("0"));
        assert_eq!(policy.refund_fraction_for(-3), dec("0"));
    }

    #[test]
    fn test_default_refund_schedule_passes_validation() {
        let rebuilt = RefundPolicy::new(RefundPolicy::default().tiers().to_vec()).unwrap();
        assert_eq!(rebuilt, RefundPolicy::default());
    }

    #[test]
    fn test_new_sorts_tiers() {
        let policy = RefundPolicy::new(vec![tier(1, "0.25"), tier(7, "1"), tier(3, "0.5")])
            .unwrap();
        let bounds: Vec<i64> = policy.tiers().iter().map(|t| t.min_days_before).collect();
        assert_eq!(bounds, vec![7, 3, 1]);
    }

    #[test]
    fn test_new_rejects_increasing_refund() {
        let result = RefundPolicy::new(vec![tier(7, "0.5"), tier(3, "0.75")]);
        match result {
            Err(EngineError::InvalidPolicy { message }) => {
                assert!(message.contains("must not increase"));
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_new_rejects_fraction_above_one() {
        let result = RefundPolicy::new(vec![tier(7, "1.5")]);
        assert!(matches!(result, Err(EngineError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_new_rejects_duplicate_bounds() {
        let result = RefundPolicy::new(vec![tier(3, "0.5"), tier(3, "0.25")]);
        match result {
            Err(EngineError::InvalidPolicy { message }) => {
                assert!(message.contains("duplicate"));
            }
            _ => panic!("Expected InvalidPolicy error"),
        }
    }

    #[test]
    fn test_empty_schedule_refunds_nothing() {
        let policy = RefundPolicy::new(vec![]).unwrap();
        assert_eq!(policy.refund_fraction_for(100), Decimal::ZERO);
        assert!(policy.tier_for(100).is_none());
    }

    #[test]
    fn test_pricing_policy_validation() {
        assert!(PricingPolicy::default().validate().is_ok());

        let negative_discount = PricingPolicy {
            long_stay_nights: 30,
            long_stay_discount: dec("-0.1"),
        };
        assert!(negative_discount.validate().is_err());

        let zero_nights = PricingPolicy {
            long_stay_nights: 0,
            long_stay_discount: dec("0.4"),
        };
        assert!(zero_nights.validate().is_err());
    }

    #[test]
    fn test_pricing_policy_deserialization() {
        let yaml = "long_stay_nights: 28\nlong_stay_discount: \"0.25\"\n";
        let policy: PricingPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.long_stay_nights, 28);
        assert_eq!(policy.long_stay_discount, dec("0.25"));
    }
}
