//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{extract::State, Json};
use tracing::warn;

use crate::{models::HealthResponse, services::AppState};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": true,
///   "uptime_seconds": 12
/// }
/// ```
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_ok = match state.database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse::healthy(db_ok).with_uptime(state.uptime_seconds()))
}
