//! Repository traits and PostgreSQL implementations
//!
//! Each repository follows these patterns:
//! - One parameterized statement per operation, no transactions
//! - Driver errors are returned as-is inside `DbError`
//! - `id` columns are BIGINT; string entity ids are parsed to keys before binding

pub mod contacts;
pub mod groups;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::models::{Contact, Group};

pub use contacts::PgContactRepo;
pub use groups::PgGroupRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Driver error, message unchanged. A read with no matching row is
    /// `sqlx::Error::RowNotFound`.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// Entity id that cannot be stored in an integer key column
    #[error("invalid id '{0}': not an integer")]
    InvalidKey(String),
}

/// Key column value for a string entity id. `"05"` and `"5"` are the same key.
pub(crate) fn parse_key(id: &str) -> Result<i64, DbError> {
    id.parse().map_err(|_| DbError::InvalidKey(id.to_owned()))
}

impl DbError {
    /// Whether this is the driver's "no rows" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Sqlx(sqlx::Error::RowNotFound))
    }
}

/// Contact persistence
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, ctx: &RequestContext, contact: &Contact) -> Result<(), DbError>;

    /// Fails with the driver's not-found error when no row matches.
    async fn read(&self, ctx: &RequestContext, id: i64) -> Result<Contact, DbError>;

    /// Updating an unknown id affects zero rows and is not an error.
    async fn update(&self, ctx: &RequestContext, contact: &Contact) -> Result<(), DbError>;

    /// Deleting an unknown id is not an error.
    async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), DbError>;
}

/// Group persistence
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Stores id and name only; `group.contacts` is ignored.
    async fn create(&self, ctx: &RequestContext, group: &Group) -> Result<(), DbError>;

    /// Returns the group with its member contacts.
    async fn read(&self, ctx: &RequestContext, id: i64) -> Result<Group, DbError>;

    async fn add_contact(
        &self,
        ctx: &RequestContext,
        contact_id: i64,
        group_id: i64,
    ) -> Result<(), DbError>;
}
