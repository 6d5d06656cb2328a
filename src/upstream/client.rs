//! Workflow service client with error classification.
//!
//! # Responsibilities
//! - Build the `{base_url}/run/{flow_id}` URL
//! - Issue exactly one JSON POST per relay invocation (no retries)
//! - Classify failures: transport, non-2xx status, undecodable body

use std::time::Duration;

use serde::de::IgnoredAny;
use serde::Serialize;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Errors from the upstream workflow service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The service answered with a non-2xx status.
    #[error("API responded with status: {status}")]
    Status { status: u16, body: String },

    /// Connection, TLS, or timeout failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body was not JSON.
    #[error("invalid JSON from workflow service: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outbound body sent to the workflow service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowPayload {
    pub input_value: String,
    pub output_type: String,
    pub input_type: String,
}

/// Thin wrapper over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct WorkflowClient {
    http: reqwest::Client,
}

impl WorkflowClient {
    /// Create a client from upstream settings.
    ///
    /// No timeout is applied unless `timeout_secs` is set.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Run a flow and return the JSON document it produced, byte for byte.
    ///
    /// The body is checked to be well-formed JSON but never re-encoded, so key
    /// order and number precision survive the relay.
    pub async fn run_flow(
        &self,
        base_url: &str,
        flow_id: &str,
        payload: &FlowPayload,
    ) -> Result<String, UpstreamError> {
        let url = run_url(base_url, flow_id);

        let resp = self.http.post(&url).json(payload).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str::<IgnoredAny>(&text)?;
        Ok(text)
    }
}

/// `{base_url}/run/{flow_id}`, tolerant of a trailing slash on the base.
pub fn run_url(base_url: &str, flow_id: &str) -> String {
    format!("{}/run/{}", base_url.trim_end_matches('/'), flow_id)
}
