//! Blocking HTTP client for the remote analysis service.
//!
//! Runs on the background worker thread, never on the UI thread. Any
//! transport failure, non-2xx status, or body that does not match the
//! response contract is surfaced as a [`ClientError`]; the orchestrator
//! reports all three as one generic analysis failure.

use std::fmt;
use std::time::Duration;

use finsnap_core::protocol::{AnalysisInput, AnalysisResult};

#[derive(Debug)]
pub enum ClientError {
    /// Could not build the client or reach the service.
    Transport(String),
    /// The service answered with a non-success status.
    Status(u16),
    /// The body did not match the response contract.
    MalformedBody(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) => write!(f, "transport error: {msg}"),
            ClientError::Status(code) => write!(f, "analysis service returned status {code}"),
            ClientError::MalformedBody(msg) => write!(f, "malformed response body: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

pub struct AnalysisClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue one `POST /analyze` request carrying the validated input.
    pub fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}/analyze", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        serde_json::from_str(&text).map_err(|e| ClientError::MalformedBody(e.to_string()))
    }
}
