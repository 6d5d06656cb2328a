//! Client-side half of the relay: what the browser pages do, in Rust.
//!
//! # Data Flow
//! ```text
//! form input
//!     → patient.rs (format rows, build PatientRecord / lookup input)
//!     → api.rs (resolve URL for Development or Deployed, single POST)
//!     → HTTP front door → workflow service
//!     → unwrap.rs (outputs[0].outputs[0].results.message.data.text, parsed twice)
//!     → pages.rs (typed result or one generic user-facing failure)
//! ```

pub mod api;
pub mod pages;
pub mod patient;
pub mod unwrap;

pub use api::{ApiClient, ApiError, ApiTarget};
pub use unwrap::{unwrap_result, UnwrapError};
