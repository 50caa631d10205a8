//! Currency helpers.
//!
//! Amounts are carried as exact [`Decimal`] values through every calculation
//! and only rounded to cents when presented.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds an amount to two decimal places, half away from zero.
///
/// ```
/// use dock_booking_engine::models::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("12.345").unwrap()).to_string(), "12.35");
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rejects negative currency inputs at the engine boundary.
pub fn ensure_non_negative(field: &str, amount: Decimal) -> EngineResult<Decimal> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::invalid_amount(field, amount));
    }
    Ok(amount)
}
