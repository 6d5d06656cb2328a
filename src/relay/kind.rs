//! Relay use cases and their per-route parameters.

use serde::{Deserialize, Serialize};

/// The three use cases the front door relays to the workflow service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayKind {
    Registration,
    Scheduling,
    Adherence,
}

impl RelayKind {
    pub const ALL: [RelayKind; 3] = [
        RelayKind::Registration,
        RelayKind::Scheduling,
        RelayKind::Adherence,
    ];

    /// Endpoint name under `/api`.
    pub const fn endpoint(self) -> &'static str {
        match self {
            RelayKind::Registration => "registration-proxy",
            RelayKind::Scheduling => "scheduler-proxy",
            RelayKind::Adherence => "adherence-proxy",
        }
    }

    /// `output_type` used when the caller omits it.
    pub const fn default_output_type(self) -> &'static str {
        match self {
            RelayKind::Registration => "chat",
            RelayKind::Scheduling | RelayKind::Adherence => "text",
        }
    }

    /// Human label used in configuration errors and logs.
    pub const fn label(self) -> &'static str {
        match self {
            RelayKind::Registration => "Registration",
            RelayKind::Scheduling => "Scheduler",
            RelayKind::Adherence => "Adherence",
        }
    }
}

impl std::fmt::Display for RelayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint())
    }
}
