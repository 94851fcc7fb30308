//! rolodex-server: contacts and groups over HTTP
//!
//! Layered request pipeline:
//! - `http`: axum handlers, request parsing, status mapping
//! - `usecase`: forwarding layer with failure logging
//! - `db`: one parameterized PostgreSQL statement per operation
//! - `models`: `Contact` and `Group` with construction-time validation

pub mod context;
pub mod db;
pub mod http;
pub mod models;
pub mod usecase;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use http::{run_server, ServerConfig};
