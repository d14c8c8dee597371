//! HTTP client for the remote prediction service.
//!
//! The service exposes a single endpoint: `POST {base}/predict` with body
//! `{"input": <string>}`, replying `{"message": <string>}` on success. The
//! widget reads only `message`; everything else about the service is out of
//! scope.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Failure of the remote call.
///
/// From the caller's perspective this is a single error kind: the chat
/// handler logs it and leaves the transcript unchanged, never branching on
/// the variant. The variants exist so the diagnostic channel can name the
/// cause.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// Network-level failure (connect, DNS, timeout, body read).
    #[error("request to prediction service failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("prediction service returned status {0}")]
    Status(reqwest::StatusCode),
    /// The response body was not the expected JSON shape.
    #[error("prediction service reply was malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The response parsed but carried no `message` field.
    #[error("prediction service reply is missing the `message` field")]
    MissingMessage,
}

/// Request body for the predict endpoint.
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    /// Raw user input, untrimmed.
    input: &'a str,
}

/// Success reply from the predict endpoint.
#[derive(Debug, Deserialize)]
struct PredictReply {
    /// Reply text. Optional so a `{}` body surfaces as a typed failure
    /// rather than a deserialization panic.
    message: Option<String>,
}

/// Client for the remote prediction service.
#[derive(Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for PredictClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PredictClient {
    /// Create a new client for the service at `base_url`.
    ///
    /// `timeout`, when set, bounds each outbound request. Unset means a
    /// request waits as long as the service takes. There are no retries.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, PredictError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the predict endpoint.
    fn endpoint(&self) -> String {
        format!("{}/predict", self.base_url.trim_end_matches('/'))
    }

    /// Send one prediction request and return the reply text.
    ///
    /// Fire-and-wait: a single `POST`, no retries, no streaming. Any
    /// non-success status or malformed body is an error.
    pub async fn predict(&self, input: &str) -> Result<String, PredictError> {
        let url = self.endpoint();

        let resp = self
            .http
            .post(&url)
            .json(&PredictRequest { input })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PredictError::Status(status));
        }

        let bytes = resp.bytes().await?;
        let reply: PredictReply = serde_json::from_slice(&bytes)?;
        reply.message.ok_or(PredictError::MissingMessage)
    }
}
