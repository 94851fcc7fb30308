//! Database layer - connection pool and repositories
//!
//! - One shared PgPool, injected into each repository
//! - One statement per operation, no transactions
//! - Rely on DB constraints, no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
