//! Calculation logic for the Dock Booking Engine.
//!
//! This module contains the pure booking calculations: day-granularity date
//! arithmetic, slip availability against confirmed reservations, stay
//! pricing with the long-stay discount, the tiered cancellation refund
//! schedule, and the booking quote that composes them. None of these
//! functions perform I/O.

mod availability;
mod date_interval;
mod pricing;
mod quote;
mod refund;

pub use availability::{
    AvailabilityResult, check_availability, find_conflicts, is_available, ranges_overlap,
};
pub use date_interval::{days_between, days_until, night_count, normalize_to_day};
pub use pricing::{
    compute_total, compute_total_with_policy, pricing_audit_step, qualifies_for_long_stay,
};
pub use quote::{amount_due_for, quote_booking};
pub use refund::{
    compute_refund, compute_refund_at, compute_refund_with_policy, refund_audit_step,
    settlement_status_for,
};
