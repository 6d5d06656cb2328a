//! Parameterized relay handler.
//!
//! One `RelayHandler` is constructed per use case at startup. The flow
//! identifier and base URL are captured from `RelayConfig` at construction,
//! so handlers never consult the process environment while serving.

use axum::http::Method;

use crate::config::RelayConfig;
use crate::observability::metrics;
use crate::relay::error::RelayError;
use crate::relay::kind::RelayKind;
use crate::relay::request::RelayRequest;
use crate::upstream::{UpstreamError, WorkflowClient};

pub struct RelayHandler {
    kind: RelayKind,
    flow_id: Option<String>,
    base_url: Option<String>,
    client: WorkflowClient,
}

impl RelayHandler {
    pub fn new(kind: RelayKind, config: &RelayConfig, client: WorkflowClient) -> Self {
        let base_url = config
            .upstream
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            kind,
            flow_id: config.flows.flow_id(kind).map(str::to_string),
            base_url,
            client,
        }
    }

    pub fn kind(&self) -> RelayKind {
        self.kind
    }

    /// Validate, forward once, and return the upstream JSON text verbatim.
    ///
    /// Checks run in order: method, `input_value`, flow identifier, base URL.
    /// The workflow service is only contacted when all of them pass.
    pub async fn handle(&self, method: &Method, body: &[u8]) -> Result<String, RelayError> {
        if *method != Method::POST {
            return Err(RelayError::MethodNotAllowed);
        }

        let payload = RelayRequest::from_body(body)?.into_payload(self.kind)?;

        let flow_id = self
            .flow_id
            .as_deref()
            .ok_or(RelayError::MissingFlowId(self.kind))?;
        let base_url = self.base_url.as_deref().ok_or(RelayError::MissingBaseUrl)?;

        tracing::debug!(
            route = %self.kind,
            output_type = %payload.output_type,
            input_type = %payload.input_type,
            "Relaying to workflow service"
        );

        match self.client.run_flow(base_url, flow_id, &payload).await {
            Ok(body) => Ok(body),
            Err(e) => {
                log_upstream_failure(self.kind, &e);
                metrics::record_upstream_failure(self.kind.endpoint());
                Err(e.into())
            }
        }
    }
}

fn log_upstream_failure(kind: RelayKind, err: &UpstreamError) {
    match err {
        UpstreamError::Status { status, body } => {
            tracing::error!(
                route = %kind,
                upstream_status = *status,
                upstream_body = %body,
                "{} proxy error: workflow service returned failure", kind.label()
            );
        }
        other => {
            tracing::error!(
                route = %kind,
                error = %other,
                "{} proxy error", kind.label()
            );
        }
    }
}
