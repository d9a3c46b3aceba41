//! HTTP client for the completion relay.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Role/content pair as sent over the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl WireMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Every way a backend call can fail. The session controller treats all
/// variants uniformly: log, apologize, leave the quota untouched.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("no reply text in backend response")]
    MalformedResponse,
}

/// Seam between the session controller and the completion service, so the
/// controller can be driven by a mock in tests.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: &[WireMessage]) -> Result<String, BackendError>;
}

/// Production backend: `POST {endpoint}` with `{"messages": [...]}`.
pub struct HttpCompletionBackend {
    endpoint: String,
    http_client: HttpClient,
}

impl HttpCompletionBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: HttpClient::new(),
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionBackend {
    async fn complete(&self, messages: &[WireMessage]) -> Result<String, BackendError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&json!({ "messages": messages }))
            .send()
            .await
            .map_err(|err| BackendError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| BackendError::Network(err.to_string()))?;

        extract_reply_text(&payload).ok_or(BackendError::MalformedResponse)
    }
}

/// Pull the reply text out of a response payload.
///
/// The relay wraps its real payload in a stringified `body` field; a direct
/// payload is also accepted. In either shape the text lives under
/// `response`, `message`, or `answer`, checked in that order.
pub fn extract_reply_text(payload: &Value) -> Option<String> {
    if let Some(body) = payload.get("body").and_then(Value::as_str) {
        let inner: Value = serde_json::from_str(body).ok()?;
        return first_text_field(&inner);
    }
    first_text_field(payload)
}

fn first_text_field(value: &Value) -> Option<String> {
    ["response", "message", "answer"]
        .iter()
        .find_map(|field| value.get(field).and_then(Value::as_str))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
