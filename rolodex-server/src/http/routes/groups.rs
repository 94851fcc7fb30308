//! Group endpoint
//!
//! `/group` with GET/POST, and PUT for adding a contact to a group.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::method_not_allowed;
use crate::context::RequestContext;
use crate::http::error::ApiError;
use crate::http::extractors::{IdParam, JsonBody, MembershipParams};
use crate::http::server::AppState;
use crate::models::Group;

/// Body returned after a successful membership insert
pub const CONTACT_ADDED: &str = "Contact added to group successfully";

#[tracing::instrument(name = "http.get_group", skip_all, fields(correlation_id = %ctx, id = id))]
async fn get_group(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    IdParam(id): IdParam,
) -> Result<Json<Group>, ApiError> {
    let group = state.groups.read_group(&ctx, id).await?;
    Ok(Json(group))
}

#[tracing::instrument(name = "http.create_group", skip_all, fields(correlation_id = %ctx))]
async fn create_group(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    JsonBody(group): JsonBody<Group>,
) -> Result<StatusCode, ApiError> {
    group.validate()?;
    state.groups.create_group(&ctx, &group).await?;
    Ok(StatusCode::CREATED)
}

/// PUT /group?contactID=&groupID= - add a contact to a group
#[tracing::instrument(
    name = "http.add_contact_to_group",
    skip_all,
    fields(correlation_id = %ctx, contact_id = params.contact_id, group_id = params.group_id)
)]
async fn add_contact_to_group(
    ctx: RequestContext,
    State(state): State<Arc<AppState>>,
    params: MembershipParams,
) -> Result<(StatusCode, &'static str), ApiError> {
    state
        .groups
        .add_contact_to_group(&ctx, params.contact_id, params.group_id)
        .await?;
    Ok((StatusCode::OK, CONTACT_ADDED))
}

/// Group routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/group",
        get(get_group)
            .post(create_group)
            .put(add_contact_to_group)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
