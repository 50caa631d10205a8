//! Pricing result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::round_to_cents;

/// The cost of a stay as computed by the pricing engine.
///
/// `final_total` always equals `base_total - discount`, and `discount` is
/// non-zero only when `discount_applied` is set.
///
/// # Example
///
/// ```
/// use dock_booking_engine::models::PricingResult;
/// use rust_decimal::Decimal;
///
/// let result = PricingResult {
///     night_count: 2,
///     base_total: Decimal::new(4000, 2),
///     discount: Decimal::ZERO,
///     final_total: Decimal::new(4000, 2),
///     discount_applied: false,
/// };
/// assert_eq!(result.final_total, result.base_total - result.discount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Number of nights charged.
    pub night_count: i64,
    /// Nights multiplied by the nightly rate.
    pub base_total: Decimal,
    /// Amount taken off the base total.
    pub discount: Decimal,
    /// The amount payable before any fee exemption.
    pub final_total: Decimal,
    /// Whether the long-stay discount was applied.
    pub discount_applied: bool,
}

impl PricingResult {
    /// Returns a copy with amounts rounded to cents.
    ///
    /// The base total and discount are rounded; the final total is derived
    /// from them so it still equals `base_total - discount`.
    pub fn rounded(&self) -> Self {
        let base_total = round_to_cents(self.base_total);
        let discount = round_to_cents(self.discount);
        Self {
            night_count: self.night_count,
            base_total,
            discount,
            final_total: base_total - discount,
            discount_applied: self.discount_applied,
        }
    }
}
