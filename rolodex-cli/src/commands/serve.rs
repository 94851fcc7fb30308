//! HTTP server command
//!
//! Creates the shared pool once and runs the contacts/groups API until
//! shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use rolodex_server::db::{create_pool, schema, DEFAULT_MAX_CONNECTIONS};
use rolodex_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ROLODEX_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "ROLODEX_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Create the contacts/groups tables if they do not exist
    #[arg(long)]
    pub init_schema: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!(
        bind = %args.bind,
        max_connections = args.max_connections,
        "Starting rolodex server"
    );

    let pool = create_pool(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.init_schema {
        schema::ensure(&pool)
            .await
            .context("Failed to create tables")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
