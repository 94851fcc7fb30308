//! Route handlers organized by resource

pub mod health;
pub mod contacts;
pub mod groups;

use super::error::ApiError;

/// Fallback for methods a resource does not support
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
pub(crate) use test_support::{app_with, test_app};

#[cfg(test)]
mod test_support {
    use std::sync::Arc;

    use axum::Router;

    use crate::db::{ContactRepository, GroupRepository};
    use crate::http::server::{build_router, AppState, ServerConfig};
    use crate::testing::MemoryStore;

    /// Full router over one store that backs both repositories
    pub(crate) fn app_with<R>(store: Arc<R>) -> Router
    where
        R: ContactRepository + GroupRepository + 'static,
    {
        let state = AppState::from_repositories(store.clone(), store);
        build_router(state, &ServerConfig::default())
    }

    pub(crate) fn test_app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (app_with(store.clone()), store)
    }
}
