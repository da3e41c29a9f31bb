pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::user_service::UserService;
use sqlx::PgPool;

pub const DATA_SERVICE_NAME: &str = "backend-data";
pub const API_SERVICE_NAME: &str = "backend-api";

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let user_service = UserService::new(pool.clone());
        Self { pool, user_service }
    }
}
