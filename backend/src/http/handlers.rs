//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the computation. Results are stored back into the
//! session so later stages can default to them and the export endpoint
//! can combine them.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Local;

use super::dto::{
    GreenSplitRequest, HealthResponse, IntergreenRequest, SessionResults, WebsterRequest,
    MAX_PHASES, MIN_PHASES,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CycleResult, GreenSplit, IntergreenTable};
use crate::models::{FlowSet, Phase};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Calculators
// =============================================================================

/// POST /v1/intergreen
///
/// Compute the inter-green table for 2–6 phases and store it in the session.
pub async fn compute_intergreen(
    State(state): State<AppState>,
    Json(request): Json<IntergreenRequest>,
) -> HandlerResult<IntergreenTable> {
    if request.phases.len() < MIN_PHASES || request.phases.len() > MAX_PHASES {
        return Err(AppError::BadRequest(format!(
            "a signal plan takes {MIN_PHASES} to {MAX_PHASES} phases (got {})",
            request.phases.len()
        )));
    }

    let phases: Vec<Phase> = request.phases.into_iter().map(Into::into).collect();
    let table = services::compute_intergreen_table(&phases)?;

    state.session.store_intergreen(table.clone());
    Ok(Json(table))
}

/// POST /v1/cycle
///
/// Compute Webster's optimal cycle and store it in the session. The lost
/// time defaults to the session's inter-green Tp when omitted.
pub async fn compute_cycle(
    State(state): State<AppState>,
    Json(request): Json<WebsterRequest>,
) -> HandlerResult<CycleResult> {
    let lost_time_s = state.session.resolve_lost_time(request.lost_time_s)?;
    let flow_set = FlowSet::new(request.flows_vph, request.saturations_vph)?;

    let cycle = services::compute_optimal_cycle(lost_time_s, &flow_set)?;

    state.session.store_cycle(cycle.clone());
    Ok(Json(cycle))
}

/// POST /v1/green-times
///
/// Split the effective green time across phases and store the result. The
/// cycle defaults to the session's Webster cycle, the lost time to the
/// session's inter-green Tp.
pub async fn compute_green_times(
    State(state): State<AppState>,
    Json(request): Json<GreenSplitRequest>,
) -> HandlerResult<GreenSplit> {
    let cycle_s = state.session.resolve_cycle(request.cycle_s)?;
    let lost_time_s = state.session.resolve_lost_time(request.lost_time_s)?;
    let flow_set = FlowSet::new(request.flows_vph, request.saturations_vph)?;

    let split = services::allocate_green_times(cycle_s, lost_time_s, &flow_set, request.strategy)?;

    state.session.store_green_split(split.clone());
    Ok(Json(split))
}

// =============================================================================
// Session results and export
// =============================================================================

/// GET /v1/results
///
/// Current accumulated session results; slots not yet computed are null.
pub async fn get_results(State(state): State<AppState>) -> HandlerResult<SessionResults> {
    Ok(Json(state.session.snapshot()))
}

/// GET /v1/export
///
/// Download the combined results as a timestamped CSV attachment.
pub async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let exported_at = Local::now();
    let csv = services::build_csv(&state.session.snapshot(), exported_at)?;
    let filename = services::export_filename(exported_at);

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
