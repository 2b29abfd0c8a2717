//! # Quill API Server
//!
//! HTTP layer of the Quill blog backend: routing, bearer authentication,
//! error mapping and request observability on top of `quill-core`.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

pub use state::AppState;
