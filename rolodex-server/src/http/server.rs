//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default; OPTIONS is answered only for preflights
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::db::{ContactRepository, GroupRepository, PgContactRepo, PgGroupRepo};
use crate::usecase::{ContactInteractor, ContactUseCase, GroupInteractor, GroupUseCase};

/// Default bind address
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            cors_permissive: false,
        }
    }
}

/// Shared application state
///
/// Cloned into every request; the use cases hold the repositories, which
/// hold the one connection pool.
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactUseCase>,
    pub groups: Arc<dyn GroupUseCase>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactUseCase>, groups: Arc<dyn GroupUseCase>) -> Self {
        Self { contacts, groups }
    }

    /// Wire use cases over the given repositories.
    pub fn from_repositories(
        contacts: Arc<dyn ContactRepository>,
        groups: Arc<dyn GroupRepository>,
    ) -> Self {
        Self::new(
            Arc::new(ContactInteractor::new(contacts)),
            Arc::new(GroupInteractor::new(groups)),
        )
    }

    /// Wire the PostgreSQL repositories over a shared pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::from_repositories(
            Arc::new(PgContactRepo::new(pool.clone())),
            Arc::new(PgGroupRepo::new(pool)),
        )
    }
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let port = config.bind_addr.port();
    let origins: Vec<HeaderValue> = ["localhost", "127.0.0.1"]
        .iter()
        .filter_map(|host| format!("http://{}:{}", host, port).parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn is_preflight(headers: &HeaderMap) -> bool {
    headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

/// Keeps plain OPTIONS requests away from the CORS layer, which would
/// answer every OPTIONS with 200.
async fn preflight_only(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS && !is_preflight(req.headers()) {
        return ApiError::MethodNotAllowed.into_response();
    }
    next.run(req).await
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::contacts::router())
        .merge(routes::groups::router())
        .layer(cors_layer(config))
        .layer(middleware::from_fn(preflight_only))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url, DEFAULT_MAX_CONNECTIONS).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(AppState::from_pool(pool), &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
