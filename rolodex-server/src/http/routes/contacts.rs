//! Contact endpoint
//!
//! `/contact` with GET/POST/PUT/DELETE; anything else is 405.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::method_not_allowed;
use crate::context::RequestContext;
use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, JsonBody};
use crate::http::server::AppState;
use crate::models::Contact;

/// GET /contact?id= - read one contact
#[tracing::instrument(name = "http.get_contact", skip_all, fields(correlation_id = %ctx, id = id))]
async fn get_contact(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    IdParam(id): IdParam,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.contacts.read_contact(&ctx, id).await?;
    Ok(Json(contact))
}

/// POST /contact - create a contact
#[tracing::instrument(name = "http.create_contact", skip_all, fields(correlation_id = %ctx))]
async fn create_contact(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    JsonBody(contact): JsonBody<Contact>,
) -> Result<StatusCode, ApiError> {
    contact.validate()?;
    state.contacts.create_contact(&ctx, &contact).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /contact - overwrite all fields of a contact
#[tracing::instrument(name = "http.update_contact", skip_all, fields(correlation_id = %ctx))]
async fn update_contact(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    JsonBody(contact): JsonBody<Contact>,
) -> Result<StatusCode, ApiError> {
    contact.validate()?;
    state.contacts.update_contact(&ctx, &contact).await?;
    Ok(StatusCode::OK)
}

/// DELETE /contact?id= - delete a contact
#[tracing::instrument(name = "http.delete_contact", skip_all, fields(correlation_id = %ctx, id = id))]
async fn delete_contact(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    IdParam(id): IdParam,
) -> Result<StatusCode, ApiError> {
    state.contacts.delete_contact(&ctx, id).await?;
    Ok(StatusCode::OK)
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/contact",
        get(get_contact)
            .post(create_contact)
            .put(update_contact)
            .delete(delete_contact)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
