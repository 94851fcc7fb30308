//! Custom Axum extractors
//!
//! Query ids and JSON bodies are parsed by hand so every malformed input
//! maps to a 400 `ApiError`, whatever axum's own rejection would have been.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::context::RequestContext;
use crate::models::ValidationError;

/// Fresh correlation context for every handler invocation
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext::new())
    }
}

/// Query pairs in request order, repeated keys kept
type QueryPairs = Vec<(String, String)>;

async fn query_pairs<S>(parts: &mut Parts, state: &S) -> Result<QueryPairs, ApiError>
where
    S: Send + Sync,
{
    let Query(params): Query<QueryPairs> = Query::from_request_parts(parts, state)
        .await
        .map_err(|e| ApiError::BadRequest {
            message: e.body_text(),
        })?;
    Ok(params)
}

/// Parse a decimal integer query parameter. Missing counts as invalid; when
/// the key repeats, the first occurrence is used.
fn parse_id(params: &[(String, String)], field: &'static str) -> Result<i64, ValidationError> {
    let raw = params
        .iter()
        .find(|(key, _)| key == field)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();
    raw.parse().map_err(|_| ValidationError::InvalidId {
        field,
        value: raw.to_owned(),
    })
}

/// `?id=<integer>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParam(pub i64);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = query_pairs(parts, state).await?;
        Ok(Self(parse_id(&params, "id")?))
    }
}

/// `?contactID=<integer>&groupID=<integer>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipParams {
    pub contact_id: i64,
    pub group_id: i64,
}

impl<S> FromRequestParts<S> for MembershipParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = query_pairs(parts, state).await?;
        match (parse_id(&params, "contactID"), parse_id(&params, "groupID")) {
            (Ok(contact_id), Ok(group_id)) => Ok(Self {
                contact_id,
                group_id,
            }),
            (contact, group) => {
                tracing::warn!(
                    contact = ?contact.err(),
                    group = ?group.err(),
                    "Invalid contactID or groupID"
                );
                Err(ApiError::BadRequest {
                    message: "Invalid contactID or groupID".to_owned(),
                })
            }
        }
    }
}

/// JSON body decoded with serde_json, no content-type requirement
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;
        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}
