use sqlx::PgPool;
use std::time::Duration;
use tracing::info;

use crate::error::Result;
use crate::utils::retry::{retry_with_policy, RetryPolicy};

const MAX_ATTEMPTS: u32 = 5;
const RETRY_DELAY: Duration = Duration::from_secs(5);

const SEED_USERS: [(&str, &str); 5] = [
    ("Juan Pérez", "juan.perez@example.com"),
    ("María García", "maria.garcia@example.com"),
    ("Carlos López", "carlos.lopez@example.com"),
    ("Ana Martínez", "ana.martinez@example.com"),
    ("Pedro Rodríguez", "pedro.rodriguez@example.com"),
];

/// One bootstrap attempt: ensure the table exists, then seed it when empty.
/// Count and inserts share a transaction; ON CONFLICT on the email unique
/// constraint keeps concurrent replica startups from double-seeding.
pub async fn init_database(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) NOT NULL UNIQUE,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *tx)
        .await?;

    if count == 0 {
        info!("Users table is empty, inserting {} seed rows", SEED_USERS.len());
        for (name, email) in SEED_USERS {
            sqlx::query(
                "INSERT INTO users (name, email) VALUES ($1, $2) ON CONFLICT (email) DO NOTHING",
            )
            .bind(name)
            .bind(email)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    info!("Database initialized");
    Ok(())
}

/// Startup entry point: up to 5 attempts, 5 seconds apart. Exhausting them is
/// fatal and the caller is expected to exit.
pub async fn init_database_with_retry(pool: &PgPool) -> Result<()> {
    let policy = RetryPolicy::new(MAX_ATTEMPTS, RETRY_DELAY);
    retry_with_policy(&policy, || init_database(pool)).await
}
