//! `reqwest`-backed HTTP client.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

use super::client::{HttpClient, HttpResponse};
use crate::config::ApiConfig;
use crate::errors::{FormflowError, RequestError};

/// HTTP client sending JSON requests relative to a configured base URL.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    config: ApiConfig,
}

impl ReqwestHttpClient {
    /// Builds a client from configuration.
    pub fn new(config: ApiConfig) -> Result<Self, FormflowError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| FormflowError::Config(format!("invalid header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FormflowError::Config(format!("invalid value for header '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(config.timeout()?)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| FormflowError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, RequestError> {
        let url = self.config.url_for(path);
        debug!(url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Request failed before a response was received");
                RequestError::transport(path, e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_else(|e| {
            warn!(url = %url, status, error = %e, "Failed to read response body");
            String::new()
        });
        debug!(url = %url, status, "Response received");

        Ok(HttpResponse { status, body })
    }
}
