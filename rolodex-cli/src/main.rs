//! rolodex CLI - runs the contacts and groups HTTP service

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    author,
    version,
    about = "Contacts and groups over HTTP, backed by PostgreSQL"
)]
struct Cli {
    /// Debug-level logging when RUST_LOG is not set
    #[arg(long, global = true)]
    debug: bool,

    /// Export spans over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real env vars take precedence
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })?;

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    };

    tracing_setup::shutdown_otel();
    result
}
