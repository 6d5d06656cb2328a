//! Client request helper.
//!
//! Resolves relay endpoint URLs for the deployment context and performs the
//! single outbound POST. No caching, retry, or timeout.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::relay::{RelayKind, RelayRequest};

/// Mount point of the client when deployed.
pub const DEFAULT_BASE_PATH: &str = "/agents/patient-care-agent";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API call failed: {status} - {body}")]
    Http { status: u16, body: String },

    #[error("API call failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the client believes it is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiTarget {
    /// Local development: endpoints are relative to the server root.
    Development,
    /// Deployed under a non-root mount point.
    Deployed { base_path: String },
}

impl ApiTarget {
    pub fn deployed(base_path: &str) -> Self {
        ApiTarget::Deployed {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// Path for a relay endpoint, e.g. `registration-proxy` →
    /// `/api/registration-proxy` or `{base_path}/api/registration-proxy`.
    ///
    /// Accepts `registration-proxy`, `/registration-proxy` or
    /// `/api/registration-proxy` interchangeably.
    pub fn api_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        let endpoint = endpoint.strip_prefix("api/").unwrap_or(endpoint);

        match self {
            ApiTarget::Development => format!("/api/{}", endpoint),
            ApiTarget::Deployed { base_path } => format!("{}/api/{}", base_path, endpoint),
        }
    }
}

impl Default for ApiTarget {
    fn default() -> Self {
        ApiTarget::deployed(DEFAULT_BASE_PATH)
    }
}

/// Performs relay calls against a front door at `origin`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
    target: ApiTarget,
}

impl ApiClient {
    pub fn new(origin: &str, target: ApiTarget) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.trim_end_matches('/').to_string(),
            target,
        }
    }

    /// Absolute URL for `endpoint`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.origin, self.target.api_url(endpoint))
    }

    /// POST `body` as JSON and return the decoded response.
    ///
    /// A non-2xx status becomes `ApiError::Http` carrying the status and the
    /// response text.
    pub async fn call<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.url(endpoint);
        tracing::debug!(url = %url, "Making API call");

        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %text, "API error response");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Call the relay route for `kind`.
    pub async fn relay(&self, kind: RelayKind, request: &RelayRequest) -> Result<Value, ApiError> {
        self.call(kind.endpoint(), request).await
    }
}
