//! Liveness endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Process facts captured at startup.
pub struct HealthState {
    started: Instant,
    environment: String,
}

impl HealthState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            started: Instant::now(),
            environment: environment.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    /// Seconds since the server was constructed.
    pub uptime: f64,
    pub version: String,
    pub environment: String,
}

pub async fn health(State(state): State<Arc<HealthState>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started.elapsed().as_secs_f64(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.clone(),
    })
}
