use super::state::ApiState;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::{Json, response::IntoResponse};
use foodloop_derive::{api_handler, api_model};
use foodloop_domain::constants::SYSTEM_TAG;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::warn;

#[api_model]
/// Health check response
pub struct HealthResponse {
    /// `up`, or `degraded` when the database does not answer
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses(
        (status = OK, description = "Service is healthy", body = HealthResponse),
        (status = SERVICE_UNAVAILABLE, description = "Database unreachable", body = HealthResponse),
    ),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let (status, label) = match state.database.health().await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(err) => {
            warn!(error = %err, "Health check: database unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded")
        },
    };

    let body = HealthResponse {
        status: label.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        status,
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
