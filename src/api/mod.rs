//! HTTP surface for the calculator
//!
//! Thin JSON handlers over the application service, plus the middleware
//! stack (request IDs, logging, error formatting) shared by every route.

pub mod error_response;
pub mod middleware;
pub mod routes;

pub use error_response::{ErrorResponse, ErrorResponseExt};
pub use routes::{app, router, AppState, ReportRequest};

/// Header carrying the correlation ID for a request
pub const REQUEST_ID_HEADER: &str = "x-request-id";
