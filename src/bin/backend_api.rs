use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use users_backend::{
    config::{Config, DATA_SERVICE_URL},
    routes,
    services::data_client::{DataServiceClient, REQUEST_TIMEOUT},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = Config::from_env()?;

    let client = DataServiceClient::new(DATA_SERVICE_URL, REQUEST_TIMEOUT);

    let app = Router::new()
        .route("/", get(routes::proxy::forward_users))
        .route("/health", get(routes::health::api_health))
        .with_state(client)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("backend-api listening on {}, forwarding to {}", addr, DATA_SERVICE_URL);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
