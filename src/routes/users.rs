use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::{dto::user_dto::UsersResponse, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users ordered by ascending id", body = UsersResponse),
        (status = 500, description = "Store access failed")
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_users().await?;
    info!("Returning {} users", users.len());
    Ok(Json(UsersResponse::new(users)))
}
