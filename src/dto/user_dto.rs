use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::user::User;
use crate::{API_SERVICE_NAME, DATA_SERVICE_NAME};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
    pub service: String,
}

impl UsersResponse {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            count: users.len(),
            users,
            service: DATA_SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataHealthResponse {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub service: String,
}

impl DataHealthResponse {
    pub fn connected() -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
            service: DATA_SERVICE_NAME.to_string(),
        }
    }

    pub fn disconnected(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: "disconnected".to_string(),
            error: Some(error),
            service: DATA_SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiHealthResponse {
    pub status: String,
    pub service: String,
}

impl ApiHealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: API_SERVICE_NAME.to_string(),
        }
    }
}
