use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::warn;

use crate::dto::user_dto::{ApiHealthResponse, DataHealthResponse};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Store reachable", body = DataHealthResponse),
        (status = 503, description = "Store unreachable", body = DataHealthResponse)
    )
)]
#[axum::debug_handler]
pub async fn data_health(State(state): State<AppState>) -> impl IntoResponse {
    match state.user_service.ping().await {
        Ok(()) => (StatusCode::OK, Json(DataHealthResponse::connected())),
        Err(err) => {
            warn!("Health check failed: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DataHealthResponse::disconnected(err.to_string())),
            )
        }
    }
}

/// Liveness only; backend-data reachability is deliberately not probed here.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = ApiHealthResponse)
    )
)]
#[axum::debug_handler]
pub async fn api_health() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiHealthResponse::healthy()))
}
