//! HTTP server for Kaiwa transcript scoring.

pub mod config;
pub mod http;
pub mod logging;

pub use config::{LogFormat, ServerArgs};
pub use http::{build_router, AppState};
