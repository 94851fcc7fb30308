//! API error types with IntoResponse
//!
//! Client input problems are 400, every use-case failure is 500. The body is
//! the plain error message, storage errors included.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::ValidationError;
use crate::usecase::UseCaseError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Field or query parameter validation failed (400)
    Validation(ValidationError),

    /// Request body is not valid JSON for the target type (400)
    Decode(serde_json::Error),

    /// Other malformed input (400)
    BadRequest { message: String },

    /// Use case returned an error (500, logged). Not-found lands here too.
    UseCase(UseCaseError),

    /// Unsupported HTTP method on a resource (405)
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Decode(_) | Self::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::UseCase(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Decode(e) => e.to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::UseCase(e) => e.to_string(),
            Self::MethodNotAllowed => "Invalid method".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        match &self {
            Self::UseCase(_) => tracing::error!(status = status.as_u16(), "{}", message),
            Self::MethodNotAllowed => {}
            _ => tracing::warn!(status = status.as_u16(), "{}", message),
        }

        (status, message).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e)
    }
}

impl From<UseCaseError> for ApiError {
    fn from(e: UseCaseError) -> Self {
        Self::UseCase(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbError;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let response = ApiError::Validation(ValidationError::InvalidPhone).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "phone number should contain only digits");
    }

    #[tokio::test]
    async fn decode_error_is_400() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_500_with_driver_message() {
        let err = UseCaseError::from(DbError::from(sqlx::Error::RowNotFound));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, sqlx::Error::RowNotFound.to_string());
    }

    #[tokio::test]
    async fn method_not_allowed_is_405() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_text(response).await, "Invalid method");
    }
}
