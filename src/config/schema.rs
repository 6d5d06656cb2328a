//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::relay::RelayKind;

/// Root configuration for the relay server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream workflow service settings.
    pub upstream: UpstreamConfig,

    /// Flow identifiers, one per use case.
    pub flows: FlowConfig,

    /// Static client bundle settings.
    pub client: ClientConfig,

    /// Shutdown behaviour.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Security hardening.
    pub security: SecurityConfig,

    /// Deployment environment name reported by `/health`.
    pub environment: EnvironmentName,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3001".to_string(),
        }
    }
}

/// Upstream workflow service configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the workflow service; flows run at `{base_url}/run/{flow_id}`.
    pub base_url: Option<String>,

    /// Optional total timeout for the outbound call. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

/// Opaque flow identifiers selecting which workflow handles each use case.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FlowConfig {
    pub registration_id: Option<String>,
    pub scheduler_id: Option<String>,
    pub adherence_id: Option<String>,
}

impl FlowConfig {
    /// Flow identifier for the given use case, if configured and non-empty.
    pub fn flow_id(&self, kind: RelayKind) -> Option<&str> {
        let id = match kind {
            RelayKind::Registration => &self.registration_id,
            RelayKind::Scheduling => &self.scheduler_id,
            RelayKind::Adherence => &self.adherence_id,
        };
        id.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Built client bundle served under a fixed base path.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Mount point of the client application (no trailing slash).
    pub base_path: String,

    /// Directory holding the built bundle (`index.html` + assets).
    pub dist_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: "/agents/patient-care-agent".to_string(),
            dist_dir: "dist".to_string(),
        }
    }
}

/// Shutdown configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Time allowed for in-flight requests to drain after a termination signal.
    pub grace_period_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Deployment environment label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct EnvironmentName(pub String);

impl Default for EnvironmentName {
    fn default() -> Self {
        Self("development".to_string())
    }
}

impl std::fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
