//! Contact form submission through the form relay.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// A visitor's message, validated before any network call.
#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("please fill in your {0}")]
    MissingField(&'static str),
    #[error("that doesn't look like an email address")]
    InvalidEmail,
    #[error("contact form is not configured")]
    NotConfigured,
    #[error("network error: {0}")]
    Network(String),
    #[error("the form service rejected the submission: {0}")]
    Rejected(String),
}

impl ContactForm {
    /// Reject obviously incomplete submissions locally.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    subject: String,
    from_name: &'static str,
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default = "default_rejection_message")]
    message: String,
}

fn default_rejection_message() -> String {
    "Failed to send message. Please try again.".to_string()
}

/// Seam for the form relay, mockable in tests.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Production relay client. Success is the boolean `success` field of the
/// JSON response.
pub struct HttpFormRelay {
    endpoint: String,
    access_key: Option<String>,
    http_client: HttpClient,
}

impl HttpFormRelay {
    pub fn new(endpoint: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key,
            http_client: HttpClient::new(),
        }
    }
}

#[async_trait]
impl FormRelay for HttpFormRelay {
    async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        form.validate()?;
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(ContactError::NotConfigured)?;

        let payload = RelayPayload {
            access_key,
            name: &form.name,
            email: &form.email,
            message: &form.message,
            subject: format!("Portfolio Contact from {}", form.name),
            from_name: "Portfolio Contact Form",
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ContactError::Network(err.to_string()))?;

        let relayed: RelayResponse = response
            .json()
            .await
            .map_err(|err| ContactError::Network(err.to_string()))?;

        if relayed.success {
            Ok(())
        } else {
            warn!(message = %relayed.message, "form relay rejected submission");
            Err(ContactError::Rejected(relayed.message))
        }
    }
}
