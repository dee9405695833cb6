//! Health check handler.

use axum::Json;
use axum::extract::State;

use stockroom_core::error::AppError;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let reachable = state.store.health_check().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Store health check failed");
        false
    });
    if !reachable {
        return Err(AppError::service_unavailable("Store is unreachable").into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        store: "connected".to_string(),
    }))
}
