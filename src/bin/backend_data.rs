use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use users_backend::{
    config::Config,
    database::{bootstrap, pool::create_pool},
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;

    info!(
        "Connecting to PostgreSQL at {}:{}",
        config.db_host, config.db_port
    );
    let pool = create_pool(&config)?;

    // Fatal when the retries are exhausted: exit non-zero instead of serving
    // against an uninitialized store.
    bootstrap::init_database_with_retry(&pool).await?;

    let app_state = AppState::new(pool);

    let app = Router::new()
        .route("/users", get(routes::users::list_users))
        .route("/health", get(routes::health::data_health))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("backend-data listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
