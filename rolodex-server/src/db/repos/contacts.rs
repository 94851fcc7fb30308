//! Contact repository
//!
//! Plain single-statement CRUD:
//! - read: `fetch_one`, so a missing row is the driver's `RowNotFound`
//! - update/delete: success even when zero rows are affected

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{parse_key, ContactRepository, DbError};
use crate::context::RequestContext;
use crate::models::Contact;

/// Contact row from database
#[derive(Debug, Clone, FromRow)]
struct ContactRecord {
    id: i64,
    first_name: String,
    last_name: String,
    middle_name: String,
    phone: String,
}

impl From<ContactRecord> for Contact {
    fn from(r: ContactRecord) -> Self {
        Self {
            id: r.id.to_string(),
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            phone: r.phone,
        }
    }
}

/// PostgreSQL contact repository
#[derive(Clone)]
pub struct PgContactRepo {
    pool: PgPool,
}

impl PgContactRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepo {
    #[tracing::instrument(name = "repo.create_contact", skip_all, fields(correlation_id = %ctx, id = %contact.id))]
    async fn create(&self, ctx: &RequestContext, contact: &Contact) -> Result<(), DbError> {
        let id = parse_key(&contact.id)?;
        sqlx::query(
            r#"
            INSERT INTO contacts (id, firstName, lastName, middleName, phone)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.middle_name)
        .bind(&contact.phone)
        .execute(&self.pool)
        .await?;

        tracing::info!("Contact created successfully");
        Ok(())
    }

    #[tracing::instrument(name = "repo.read_contact", skip_all, fields(correlation_id = %ctx, id = %id))]
    async fn read(&self, ctx: &RequestContext, id: i64) -> Result<Contact, DbError> {
        let record: ContactRecord = sqlx::query_as(
            r#"
            SELECT id,
                   firstName AS first_name,
                   lastName AS last_name,
                   middleName AS middle_name,
                   phone
            FROM contacts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Contact read successfully");
        Ok(record.into())
    }

    #[tracing::instrument(name = "repo.update_contact", skip_all, fields(correlation_id = %ctx, id = %contact.id))]
    async fn update(&self, ctx: &RequestContext, contact: &Contact) -> Result<(), DbError> {
        let id = parse_key(&contact.id)?;
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET firstName = $2, lastName = $3, middleName = $4, phone = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.middle_name)
        .bind(&contact.phone)
        .execute(&self.pool)
        .await?;

        tracing::info!(rows = result.rows_affected(), "Contact updated successfully");
        Ok(())
    }

    #[tracing::instrument(name = "repo.delete_contact", skip_all, fields(correlation_id = %ctx, id = %id))]
    async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!(rows = result.rows_affected(), "Contact deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema, DEFAULT_MAX_CONNECTIONS};

    // Run with: DATABASE_URL=postgres://... cargo test -p rolodex-server -- --ignored

    async fn repo() -> PgContactRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url, DEFAULT_MAX_CONNECTIONS).await.expect("pool creation failed");
        schema::ensure(&pool).await.expect("schema bootstrap failed");
        PgContactRepo::new(pool)
    }

    fn unique_id() -> i64 {
        (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i64
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_read_round_trips() {
        let repo = repo().await;
        let ctx = RequestContext::new();
        let id = unique_id();
        let contact = Contact::new(id.to_string(), "Jane", "Doe", "", "5551234").unwrap();

        repo.create(&ctx, &contact).await.unwrap();
        let read = repo.read(&ctx, id).await.unwrap();
        assert_eq!(read, contact);

        repo.delete(&ctx, id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn read_missing_is_row_not_found() {
        let repo = repo().await;
        let err = repo.read(&RequestContext::new(), unique_id()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_create_fails() {
        let repo = repo().await;
        let ctx = RequestContext::new();
        let id = unique_id();
        let contact = Contact::new(id.to_string(), "a", "b", "", "1").unwrap();

        repo.create(&ctx, &contact).await.unwrap();
        assert!(repo.create(&ctx, &contact).await.is_err());

        repo.delete(&ctx, id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_changes_fields() {
        let repo = repo().await;
        let ctx = RequestContext::new();
        let id = unique_id();
        let mut contact = Contact::new(id.to_string(), "a", "b", "", "1").unwrap();
        repo.create(&ctx, &contact).await.unwrap();

        contact.middle_name = "m".into();
        contact.phone = "222".into();
        repo.update(&ctx, &contact).await.unwrap();
        assert_eq!(repo.read(&ctx, id).await.unwrap(), contact);

        repo.delete(&ctx, id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn zero_padded_id_is_the_same_key() {
        let repo = repo().await;
        let ctx = RequestContext::new();
        let id = unique_id();
        let padded = Contact::new(format!("0{id}"), "a", "b", "", "1").unwrap();

        repo.create(&ctx, &padded).await.unwrap();
        assert_eq!(repo.read(&ctx, id).await.unwrap().id, id.to_string());

        repo.delete(&ctx, id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn non_numeric_id_is_rejected_before_insert() {
        let repo = repo().await;
        let contact = Contact::new("abc", "a", "b", "", "1").unwrap();
        let err = repo.create(&RequestContext::new(), &contact).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidKey(_)));
    }

    // Zero affected rows is reported as success for both update and delete.
    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_missing_succeed() {
        let repo = repo().await;
        let ctx = RequestContext::new();
        let id = unique_id();
        let ghost = Contact::new(id.to_string(), "a", "b", "", "1").unwrap();

        repo.update(&ctx, &ghost).await.unwrap();
        repo.delete(&ctx, id).await.unwrap();
        assert!(repo.read(&ctx, id).await.unwrap_err().is_not_found());
    }
}
