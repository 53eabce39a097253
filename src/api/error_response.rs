//! Unified error response handling for the HTTP surface
//!
//! Every failure leaves the service in the same JSON envelope, with a
//! request ID for correlation and a machine-readable code. Validation
//! failures additionally carry the per-field violation list so callers can
//! highlight the offending inputs.

use crate::api::REQUEST_ID_HEADER;
use crate::error::Error;
use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Standard error response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlation
    pub request_id: Option<String>,
    /// Additional error details, such as field violations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
            details: None,
        }
    }

    /// Add request ID for correlation
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add additional error details
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convert to HTTP response with proper headers
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        let request_id = self.request_id.clone();
        let mut response = (status, Json(self)).into_response();

        // Add request ID header if available
        if let Some(id) = request_id {
            if let Ok(header_value) = HeaderValue::from_str(&id) {
                response
                    .headers_mut()
                    .insert(REQUEST_ID_HEADER, header_value);
            }
        }

        response
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for Error {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Error::Validation(violations) => {
                ErrorResponse::new("VALIDATION_FAILED", violations.to_string())
                    .with_details(serde_json::json!(violations))
            }
            Error::NotFound { resource } => {
                ErrorResponse::new("NOT_FOUND", format!("{resource} not found"))
            }
            // Driver detail goes to the log, not the wire
            Error::Database(_) | Error::Migration(_) => ErrorResponse::new(
                "STORAGE_UNAVAILABLE",
                "Scenario storage is temporarily unavailable",
            ),
            Error::Serialization(e) => {
                ErrorResponse::new("SERIALIZATION_ERROR", format!("Serialization error: {e}"))
            }
            Error::Io(e) => ErrorResponse::new("IO_ERROR", format!("I/O error: {e}")),
            Error::Config(_) => {
                ErrorResponse::new("CONFIG_ERROR", "Service configuration error")
            }
            Error::Application { message } => {
                ErrorResponse::new("INTERNAL_ERROR", message.clone())
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Database(_) | Error::Migration(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Serialization(_)
            | Error::Io(_)
            | Error::Config(_)
            | Error::Application { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        self.to_error_response().into_response_with_status(status)
    }
}
