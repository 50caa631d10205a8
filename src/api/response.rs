//! Response types for the Dock Booking Engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditStep, RefundResult};

/// Response body for the `/availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The slip that was checked.
    pub slip_id: String,
    /// True when no confirmed reservation overlaps the candidate.
    pub available: bool,
    /// Identifiers of overlapping confirmed reservations.
    pub conflicts: Vec<String>,
}

/// Response body for the `/refund` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundResponse {
    /// The settlement, amounts rounded to cents.
    #[serde(flatten)]
    pub result: RefundResult,
    /// The audit step explaining which tier applied.
    pub audit_step: AuditStep,
}

/// Response body for the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the service is serving.
    pub status: String,
    /// The marina whose policy is loaded.
    pub marina: String,
    /// The loaded policy version.
    pub policy_version: String,
    /// The engine version.
    pub engine_version: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid range error response.
    pub fn invalid_range(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_RANGE",
            message,
            "The checkout date must be at least one day after the check-in date",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidRange { start, end } => {
                ApiErrorResponse::bad_request(ApiError::invalid_range(format!(
                    "Invalid date range: end {} must be after start {}",
                    end, start
                )))
            }
            EngineError::InvalidAmount { field, value } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}': {}", field, value),
                    "Currency amounts must not be negative",
                ),
            ),
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid booking policy", message),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
