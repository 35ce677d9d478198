//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthChecks, HealthResponse, ProbeResult, ServiceStatus};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database probe failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        database: probe_database(&state).await,
    };
    let status = checks.status();

    let code = match status {
        ServiceStatus::Healthy => StatusCode::OK,
        ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }),
    )
}

async fn probe_database(state: &AppState) -> ProbeResult {
    match state.travel_service.check_storage().await {
        Ok(()) => ProbeResult::ok("Connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Health probe: database unavailable");
            ProbeResult::error(format!("Database error: {}", e))
        }
    }
}
