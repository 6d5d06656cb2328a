//! Relay subsystem.
//!
//! # Data Flow
//! ```text
//! POST /api/<kind>-proxy
//!     → request.rs (decode body, apply per-kind defaults, require input_value)
//!     → handler.rs (resolve flow ID + base URL captured from config)
//!     → upstream::WorkflowClient (single outbound call)
//!     → handler.rs (verbatim JSON on 2xx)
//!     → error.rs (RelayError → status + {"error": ...})
//! ```
//!
//! # Design Decisions
//! - One handler type, instantiated per `RelayKind`
//! - Every failure is caught at the handler boundary and mapped to JSON
//! - Upstream detail is logged, never returned

pub mod error;
pub mod handler;
pub mod kind;
pub mod request;

pub use error::RelayError;
pub use handler::RelayHandler;
pub use kind::RelayKind;
pub use request::RelayRequest;
