//! Raw HTTP fetch used by the catalog.

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::FetchError, protocol::StatusBody};
use url::Url;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, endpoint: &Url) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, endpoint: &Url) -> Result<Vec<u8>, FetchError> {
        // Errors are stripped of their URL: the query string carries the API key.
        let response = self
            .http
            .get(endpoint.clone())
            .send()
            .await
            .map_err(|err| FetchError::network(err.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::network(err.without_url().to_string()))?;

        if !status.is_success() {
            let reason = serde_json::from_slice::<StatusBody>(&body)
                .map(|status_body| status_body.status_message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(FetchError::server(format!(
                "HTTP {}: {reason}",
                status.as_u16()
            )));
        }

        Ok(body.to_vec())
    }
}
