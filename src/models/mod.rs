//! Core data models for the Dock Booking Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod booking_quote;
mod date_range;
mod money;
mod pricing_result;
mod refund_result;
mod reservation;

pub use audit::{AuditStep, AuditTrace};
pub use booking_quote::BookingQuote;
pub use date_range::DateRange;
pub use money::{ensure_non_negative, round_to_cents};
pub use pricing_result::PricingResult;
pub use refund_result::{RefundResult, SettlementStatus};
pub use reservation::{OccupantClass, Reservation, ReservationStatus};
