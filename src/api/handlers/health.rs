//! Liveness endpoint reporting dependency status.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// `GET /health`
///
/// Probes the database (tag catalog query) and the short-link cache
/// (Redis PING). Replies 200 with `"status": "healthy"` when both
/// answer, 503 with `"status": "degraded"` otherwise; the body always
/// carries the per-dependency breakdown:
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 12 tags" },
///     "cache": { "status": "ok", "message": "Redis connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let database = check_database(&state).await;
    let cache = check_cache(&state).await;
    let all_healthy = database.is_ok() && cache.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database, cache },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// The tag catalog is tiny, so listing it doubles as a cheap probe.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.catalog_service.list_tags().await {
        Ok(tags) => CheckStatus::ok(format!("Connected, {} tags", tags.len())),
        Err(e) => CheckStatus::error(format!("Database error: {}", e)),
    }
}

async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Redis connected")
    } else {
        CheckStatus::error("Redis connection failed")
    }
}
