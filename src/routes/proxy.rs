use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{error::Result, services::data_client::DataServiceClient};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Payload relayed from backend-data"),
        (status = 504, description = "backend-data timed out"),
        (status = 503, description = "backend-data unreachable"),
        (status = 500, description = "Unexpected upstream failure")
    )
)]
#[axum::debug_handler]
pub async fn forward_users(
    State(client): State<DataServiceClient>,
) -> Result<impl IntoResponse> {
    let payload = client.fetch_users().await?;
    Ok((StatusCode::OK, Json(payload)))
}
