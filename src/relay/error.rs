//! Relay error taxonomy and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::relay::kind::RelayKind;
use crate::upstream::UpstreamError;

/// Every way a relay invocation can fail.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("Missing required input_value parameter")]
    MissingInput,

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("{} ID not configured", .0.label())]
    MissingFlowId(RelayKind),

    #[error("Upstream base URL not configured")]
    MissingBaseUrl,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// JSON error body returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::InvalidBody(_) | RelayError::MissingInput => StatusCode::BAD_REQUEST,
            RelayError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::MissingFlowId(_)
            | RelayError::MissingBaseUrl
            | RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Upstream detail never appears here.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::InvalidBody(_) => "Invalid JSON body".to_string(),
            RelayError::Upstream(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
