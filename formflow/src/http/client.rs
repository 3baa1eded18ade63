//! HTTP client trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::errors::{FormflowError, RequestError};

/// A response from the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the request was successful (2xx status).
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parses the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FormflowError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Protocol for posting JSON to the remote service.
///
/// Returns `Ok` for every response the service produced, whatever its
/// status; `Err` means no response was obtained.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Posts `body` as JSON to `path`.
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(422, "").is_success());
    }

    #[test]
    fn test_response_json() {
        let response = HttpResponse::new(400, r#"{"message": "Token expired"}"#);
        let body: serde_json::Value = response.json().unwrap();
        assert_eq!(body["message"], "Token expired");
        assert!(HttpResponse::new(200, "not json").json::<serde_json::Value>().is_err());
    }
}
