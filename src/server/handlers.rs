//! Route handlers: health and recommend.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, info};

use super::error::ApiError;
use super::state::AppState;
use crate::models::{PlantInputs, Recommendation, RecommendRequest};

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> ApiError {
    ApiError::NotFound
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// POST /recommend
pub(crate) async fn handle_recommend(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let Json(request) = payload?;

    let recommendation = PlantInputs::try_from(&request)
        .and_then(|inputs| state.engine.evaluate(&inputs))
        .map_err(|e| {
            info!(field = e.field, value = %e.value, "Rejected recommendation request");
            ApiError::from(e)
        })?;

    debug!(
        water_today = recommendation.should_water_today,
        volume_ml = recommendation.recommended_volume_ml,
        frequency_days = recommendation.recommended_frequency_days,
        fired = recommendation.fired_rules.len(),
        "Recommendation computed"
    );

    Ok(Json(recommendation))
}
