//! Upstream workflow service subsystem.
//!
//! # Data Flow
//! ```text
//! RelayHandler
//!     → client.rs (POST {base_url}/run/{flow_id}, JSON body)
//!     → Workflow service
//!     → client.rs (status check, JSON decode)
//!     → RelayHandler
//! ```
//!
//! # Design Decisions
//! - One attempt per inbound request; no retry, no backoff
//! - Non-2xx and transport failures are distinct error variants so the
//!   caller can log detail while reporting a generic failure

pub mod client;

pub use client::{FlowPayload, UpstreamError, WorkflowClient};
