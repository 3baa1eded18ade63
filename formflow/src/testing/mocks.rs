//! Stub collaborators for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

use crate::errors::RequestError;
use crate::http::{HttpClient, HttpResponse};

/// A recorded `post` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// The request path.
    pub path: String,
    /// The JSON body.
    pub body: serde_json::Value,
}

/// An HTTP client answering from a script instead of the network.
///
/// Scripted results are consumed in order; once the script is empty every
/// call gets the fallback result (a `200` with an empty body by default).
#[derive(Debug)]
pub struct StubHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse, RequestError>>>,
    fallback: Mutex<Result<HttpResponse, RequestError>>,
    requests: Mutex<Vec<RecordedRequest>>,
    delay: Option<Duration>,
}

impl StubHttpClient {
    /// Creates a stub answering `200` to everything.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Mutex::new(Ok(HttpResponse::new(200, ""))),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Creates a stub answering every call with `status`.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        let stub = Self::new();
        stub.set_fallback(Ok(HttpResponse::new(status, "")));
        stub
    }

    /// Creates a stub whose calls never obtain a response.
    #[must_use]
    pub fn unreachable() -> Self {
        let stub = Self::new();
        stub.set_fallback(Err(RequestError::transport("", "connection refused")));
        stub
    }

    /// Delays every answer by `delay`.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queues the result of the next unscripted call.
    pub fn push_result(&self, result: Result<HttpResponse, RequestError>) {
        self.script.lock().push_back(result);
    }

    /// Sets the result used once the script is exhausted.
    pub fn set_fallback(&self, result: Result<HttpResponse, RequestError>) {
        *self.fallback.lock() = result;
    }

    /// Returns the number of `post` calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Returns every recorded request, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Returns the most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.requests.lock().clear();
    }
}

impl Default for StubHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, RequestError> {
        self.requests.lock().push(RecordedRequest {
            path: path.to_string(),
            body: body.clone(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.script.lock().pop_front();
        scripted.unwrap_or_else(|| self.fallback.lock().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_then_fallback() {
        let stub = StubHttpClient::with_status(500);
        stub.push_result(Ok(HttpResponse::new(201, "created")));

        let body = serde_json::json!({"a": 1});
        assert_eq!(stub.post("/x", &body).await.unwrap().status, 201);
        assert_eq!(stub.post("/x", &body).await.unwrap().status, 500);
        assert_eq!(stub.call_count(), 2);
        assert_eq!(stub.last_request().unwrap().body, body);
    }

    #[tokio::test]
    async fn test_unreachable() {
        let stub = StubHttpClient::unreachable();
        let err = stub.post("/x", &serde_json::Value::Null).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport { .. }));
    }
}
