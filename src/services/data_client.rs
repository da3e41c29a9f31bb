use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::info;

use crate::error::{Error, Result};

/// Outbound calls to backend-data get one shot; failures map straight to a
/// client-facing status, no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct DataServiceClient {
    client: Client,
    base_url: String,
}

impl DataServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client for backend-data");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_users(&self) -> Result<JsonValue> {
        let url = format!("{}/users", self.base_url);
        info!("Calling backend-data at {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "backend-data returned {}: {}",
                status, body
            )));
        }

        let payload = response.json::<JsonValue>().await?;
        info!("Received payload from backend-data");
        Ok(payload)
    }
}
