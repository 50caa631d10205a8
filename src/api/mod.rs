//! HTTP API module for the Dock Booking Engine.
//!
//! This module provides the REST API endpoints for checking slip
//! availability, quoting bookings, and settling cancellations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AvailabilityRequest, CancellationTime, QuoteRequest, RefundRequest};
pub use response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, HealthResponse, RefundResponse,
};
pub use state::AppState;
