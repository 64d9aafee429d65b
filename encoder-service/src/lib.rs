//! Encoder Service
//!
//! Accepts `{"data": "..."}` on `POST /encode`, runs the sidecar executable
//! with `data` as its only argument and returns `{"encoded": "..."}` built
//! from the sidecar's stdout.
//!
//! Malformed bodies are answered with 400 and never reach the sidecar. Any
//! sidecar failure (launch error, non-zero exit, timeout) is a 500 with a
//! generic message; the cause is only logged.

pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod sidecar;

pub use config::ServiceConfig;
pub use errors::{ApiError, ConfigError, SidecarError};
pub use sidecar::SidecarRunner;
