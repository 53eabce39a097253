//! Route table and request handlers for the calculator API

use crate::api::middleware::{
    error_handling_middleware, logging_middleware, request_id_middleware,
};
use crate::application::{ScenarioService, ScenarioView};
use crate::config::ApplicationSettings;
use crate::domain::{
    CalculationResult, ContactEmail, ReportReceipt, Scenario, ScenarioId, ScenarioInput,
    ScenarioInputDraft, ValidationErrors,
};
use crate::error::{Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use uuid::Uuid;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub scenarios: Arc<ScenarioService>,
}

impl AppState {
    pub fn new(scenarios: ScenarioService) -> Self {
        Self {
            scenarios: Arc::new(scenarios),
        }
    }
}

/// Bare route table, without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/calculations", post(calculate_handler))
        .route(
            "/api/v1/scenarios",
            post(create_scenario_handler).get(list_scenarios_handler),
        )
        .route(
            "/api/v1/scenarios/{id}",
            get(get_scenario_handler).delete(delete_scenario_handler),
        )
        .route("/api/v1/reports", post(request_report_handler))
        .with_state(state)
}

/// Route table wrapped in the full middleware stack
///
/// The middleware are applied in the following order (outer to inner):
/// 1. Request ID generation/propagation
/// 2. Logging (with request ID)
/// 3. Error handling
/// 4. Request timeout
/// 5. Request body size limit
// `TimeoutLayer::new` is deprecated upstream in favor of
// `with_status_code`; keep the original call so the timeout response
// status stays exactly as before.
#[allow(deprecated)]
pub fn app(state: AppState, settings: &ApplicationSettings) -> Router {
    router(state)
        // Apply middleware in reverse order (innermost first)
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.request_timeout_secs,
        )))
        .layer(from_fn(error_handling_middleware))
        .layer(from_fn(logging_middleware))
        .layer(from_fn(request_id_middleware))
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Run the engine over validated inputs without persisting anything
async fn calculate_handler(
    State(state): State<AppState>,
    Json(draft): Json<ScenarioInputDraft>,
) -> Result<Json<CalculationResult>> {
    let input = ScenarioInput::try_from(draft)?;
    Ok(Json(state.scenarios.calculate(&input)))
}

async fn create_scenario_handler(
    State(state): State<AppState>,
    Json(draft): Json<ScenarioInputDraft>,
) -> Result<(StatusCode, Json<Scenario>)> {
    let input = ScenarioInput::try_from(draft)?;
    let scenario = state.scenarios.save(input).await?;
    Ok((StatusCode::CREATED, Json(scenario)))
}

async fn list_scenarios_handler(State(state): State<AppState>) -> Result<Json<Vec<Scenario>>> {
    Ok(Json(state.scenarios.list().await?))
}

async fn get_scenario_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScenarioView>> {
    let view = state.scenarios.open(&ScenarioId::new(id)).await?;
    Ok(Json(view))
}

async fn delete_scenario_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.scenarios.delete(&ScenarioId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Wire shape for a report request
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub scenario_id: Uuid,
    pub email: String,
}

/// Accept a report request for a stored scenario
///
/// Generation itself happens out of band; the handler only verifies the
/// scenario exists and records who asked.
async fn request_report_handler(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<(StatusCode, Json<ReportReceipt>)> {
    let email = ContactEmail::try_new(request.email).map_err(|_| {
        let mut violations = ValidationErrors::default();
        violations.push("email", "must be a valid email address".to_string());
        Error::from(violations)
    })?;
    let receipt = state
        .scenarios
        .request_report(&ScenarioId::new(request.scenario_id), &email)
        .await?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}
