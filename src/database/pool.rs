use crate::config::Config;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Connections open lazily so startup reaches the bootstrap retry loop even
/// when the store is still coming up.
pub fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_lazy(&config.database_url())?;
    Ok(pool)
}
