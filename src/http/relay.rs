//! Axum endpoint shared by the three relay routes.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::observability::metrics;
use crate::relay::RelayHandler;

/// Bare OPTIONS gets 200 with no body; everything else goes to the handler.
pub async fn relay_endpoint(
    State(handler): State<Arc<RelayHandler>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let start = Instant::now();
    let response = match handler.handle(&method, &body).await {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(route = %handler.kind(), error = %e, "Relay rejected");
            e.into_response()
        }
    };

    metrics::record_relay(handler.kind().endpoint(), response.status().as_u16(), start);
    response
}
