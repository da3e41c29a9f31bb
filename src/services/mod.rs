pub mod data_client;
pub mod user_service;
