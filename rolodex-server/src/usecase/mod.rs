//! Use cases - forwarding layer between delivery and repositories
//!
//! Every call is passed straight to the repository. Failures are logged
//! with the request's correlation id and returned unchanged.

pub mod contacts;
pub mod groups;

use crate::db::DbError;

pub use contacts::{ContactInteractor, ContactUseCase};
pub use groups::{GroupInteractor, GroupUseCase};

pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Use-case error type
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    /// Storage failure, including a read that matched no row
    #[error(transparent)]
    Storage(#[from] DbError),
}
