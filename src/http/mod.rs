//! HTTP front door subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (request ID, trace span, CORS, body limit)
//!     → /api/<kind>-proxy, {base}/api/<kind>-proxy → relay.rs → relay::RelayHandler
//!     → /health → health.rs
//!     → / → redirect to {base}/
//!     → {base}/* → static client bundle, index.html fallback
//! ```

pub mod health;
pub mod relay;
pub mod server;

pub use server::HttpServer;
