//! HTTP request handlers for the Dock Booking Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    amount_due_for, check_availability, compute_refund_at, compute_refund_with_policy,
    quote_booking, refund_audit_step,
};

use super::request::{AvailabilityRequest, CancellationTime, QuoteRequest, RefundRequest};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, HealthResponse, RefundResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/availability", post(availability_handler))
        .route("/quote", post(quote_handler))
        .route("/refund", post(refund_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let marina = state.config().marina();
    Json(HealthResponse {
        status: "ok".to_string(),
        marina: marina.name.clone(),
        policy_version: marina.version.clone(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for POST /availability.
///
/// Reports whether the candidate range is free on the slip.
async fn availability_handler(
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = check_availability(
        &request.slip_id,
        &request.candidate,
        &request.reservations,
        1,
    );

    info!(
        correlation_id = %correlation_id,
        slip_id = %request.slip_id,
        candidate = %request.candidate,
        reservations = request.reservations.len(),
        available = result.available,
        "Availability checked"
    );

    json_response(
        StatusCode::OK,
        &AvailabilityResponse {
            slip_id: request.slip_id,
            available: result.available,
            conflicts: result.conflicts,
        },
    )
}

/// Handler for POST /quote.
///
/// Checks availability, prices the stay, and applies fee exemption.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match quote_booking(
        &request.slip_id,
        request.range,
        request.nightly_rate,
        request.occupant_class,
        &request.reservations,
        state.policy(),
    ) {
        Ok(mut quote) => {
            quote.pricing = quote.pricing.rounded();
            quote.amount_due = amount_due_for(quote.pricing.final_total, quote.occupant_class);

            info!(
                correlation_id = %correlation_id,
                quote_id = %quote.quote_id,
                slip_id = %quote.slip_id,
                available = quote.available,
                amount_due = %quote.amount_due,
                duration_us = start_time.elapsed().as_micros(),
                "Quote completed successfully"
            );
            json_response(StatusCode::OK, &quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /refund.
///
/// Settles a cancellation against the loaded refund schedule.
async fn refund_handler(
    State(state): State<AppState>,
    payload: Result<Json<RefundRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing refund request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let cancellation_time = match request.cancellation_time() {
        Ok(time) => time,
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "Refund request invalid");
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                message,
            )));
        }
    };

    let policy = state.policy().refund();
    let settled = match cancellation_time {
        CancellationTime::Date(date) => compute_refund_with_policy(
            request.check_in,
            date,
            request.total_cost,
            request.occupant_class,
            policy,
        ),
        CancellationTime::Instant(at) => compute_refund_at(
            request.check_in,
            at,
            request.total_cost,
            request.occupant_class,
            policy,
        ),
    };

    match settled {
        Ok(result) => {
            let audit_step = refund_audit_step(
                request.total_cost,
                request.occupant_class,
                policy,
                &result,
                1,
            );
            info!(
                correlation_id = %correlation_id,
                days_until_check_in = result.days_until_check_in,
                status = result.settlement_status.as_str(),
                refund_amount = %result.refund_amount,
                "Refund settled"
            );
            json_response(
                StatusCode::OK,
                &RefundResponse {
                    result: result.rounded(),
                    audit_step,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Refund failed"
            );
            error_response(err.into())
        }
    }
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including range validation
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("Invalid date range") {
                ApiError::invalid_range(body_text)
            } else if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    error_response(ApiErrorResponse::bad_request(error))
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, &api_error.error)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
