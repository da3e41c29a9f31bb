use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;

/// Downstream address backend-api forwards to. Fixed internal service name,
/// not configurable in this version.
pub const DATA_SERVICE_URL: &str = "http://backend-data:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub server_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            db_host: get_env_or("DB_HOST", "localhost"),
            db_port: get_env_parse_or("DB_PORT", 5432)?,
            db_name: get_env_or("DB_NAME", "proj-openshift"),
            db_user: get_env_or("DB_USER", "openshift"),
            db_password: get_env_or("DB_PASSWORD", "openshift"),
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:3000"),
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
