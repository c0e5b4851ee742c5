//! Health check endpoint handlers.
//!
//! Health checks go straight to the connection pool instead of opening a
//! unit of work; they are monitoring probes, not entity operations.

use std::collections::HashMap;
use std::time::Instant;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use diesel_async::RunQueryDsl;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::doc::HEALTH_TAG;
use crate::db::AsyncDbPool;
use crate::state::AppState;

/// Overall or per-component health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health information.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub checks: HashMap<String, ComponentHealth>,
}

/// Creates health check routes.
///
/// Routes:
/// - `GET /health` - Full health report including database connectivity
/// - `GET /health/ready` - Readiness probe (database reachable)
/// - `GET /health/live` - Liveness probe (process responding)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
}

/// GET /health - Full health report
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Health report", body = HealthResponse)),
    tag = HEALTH_TAG
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = check_database(&state.db_pool).await;
    let status = database.status;

    let mut checks = HashMap::new();
    checks.insert("database".to_string(), database);

    Json(HealthResponse {
        status,
        version: crate::pkg_version().to_string(),
        checks,
    })
}

/// GET /health/ready - Readiness probe
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Ready to serve traffic"),
        (status = 503, description = "Database unreachable")
    ),
    tag = HEALTH_TAG
)]
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    match check_database(&state.db_pool).await.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health/live - Liveness probe
#[utoipa::path(
    get,
    path = "/health/live",
    responses((status = 200, description = "Process is alive")),
    tag = HEALTH_TAG
)]
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

async fn check_database(pool: &AsyncDbPool) -> ComponentHealth {
    let start = Instant::now();
    let result = match pool.get().await {
        Ok(mut conn) => diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => ComponentHealth {
            status: HealthStatus::Healthy,
            message: None,
            response_time_ms,
        },
        Err(message) => ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some(message),
            response_time_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&HealthStatus::Degraded).unwrap(),
            "\"degraded\""
        );
    }
}
