use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use tracing::error;

use crate::{API_SERVICE_NAME, DATA_SERVICE_NAME};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Timeout al conectar con backend-data")]
    UpstreamTimeout,

    #[error("No se pudo conectar con backend-data")]
    UpstreamUnreachable,

    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, service) = match &self {
            Error::UpstreamTimeout => (StatusCode::GATEWAY_TIMEOUT, API_SERVICE_NAME),
            Error::UpstreamUnreachable => (StatusCode::SERVICE_UNAVAILABLE, API_SERVICE_NAME),
            Error::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, API_SERVICE_NAME),
            Error::Database(_) | Error::Config(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, DATA_SERVICE_NAME)
            }
        };

        let message = self.to_string();
        error!("{}: {}", service, message);

        let body = Json(json!({ "error": message, "service": service }));
        (status, body).into_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::UpstreamTimeout
        } else if err.is_connect() {
            Error::UpstreamUnreachable
        } else {
            Error::Upstream(err.to_string())
        }
    }
}
