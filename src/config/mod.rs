//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file)
//!     → loader.rs (environment overlay: base URL, flow IDs, PORT)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → shared via Arc to the HTTP server and each relay handler
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup; nothing reads the environment per request
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::RelayConfig;
pub use schema::{
    ClientConfig, FlowConfig, ListenerConfig, ObservabilityConfig, ShutdownConfig, UpstreamConfig,
};
