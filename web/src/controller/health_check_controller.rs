use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::*;

use health::Status;
use service::AppState;

/// GET the liveness status: the process is up and the router is answering.
#[utoipa::path(
    get,
    path = "/management/health/liveness",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = String)
    )
)]
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, Json(Status::up_empty()))
}

/// GET the readiness status: runs the scoped health probe against the
/// backing store and maps UP/DOWN onto 200/503.
#[utoipa::path(
    get,
    path = "/management/health/readiness",
    responses(
        (status = 200, description = "Backing store verified and ready", body = String),
        (status = 503, description = "Backing store unavailable")
    )
)]
pub async fn readiness(State(app_state): State<AppState>) -> impl IntoResponse {
    let status = app_state.health_probe.check().await;

    debug!("Readiness check result: {status:?}");

    let status_code = if status.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(status))
}
