//! HTTP delivery layer
//!
//! Axum server with:
//! - `/contact` and `/group` resources, 405 for other methods
//! - Hand-parsed query ids and JSON bodies (400 on failure)
//! - Plain-text error bodies, 500 for any use-case failure

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
