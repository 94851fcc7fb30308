//! Group repository
//!
//! - read: single LEFT JOIN over the membership table (no N+1)
//! - add_contact: plain INSERT, duplicates and dangling ids fail on constraints

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::{parse_key, DbError, GroupRepository};
use crate::context::RequestContext;
use crate::models::{Contact, Group};

/// One row of the group/member join; contact columns are NULL for an
/// empty group.
#[derive(Debug, Clone, FromRow)]
struct GroupMemberRow {
    group_id: i64,
    group_name: String,
    contact_id: Option<i64>,
    first_name: Option<String>,
    last_name: Option<String>,
    middle_name: Option<String>,
    phone: Option<String>,
}

impl GroupMemberRow {
    fn contact(&mut self) -> Option<Contact> {
        let id = self.contact_id.take()?;
        Some(Contact {
            id: id.to_string(),
            first_name: self.first_name.take().unwrap_or_default(),
            last_name: self.last_name.take().unwrap_or_default(),
            middle_name: self.middle_name.take().unwrap_or_default(),
            phone: self.phone.take().unwrap_or_default(),
        })
    }
}

/// Fold join rows into one group. An empty row set is the driver's
/// not-found condition, same as a `fetch_one` miss.
fn fold_group(rows: Vec<GroupMemberRow>) -> Result<Group, DbError> {
    let mut rows = rows.into_iter();
    let mut first = rows.next().ok_or(sqlx::Error::RowNotFound)?;

    let mut contacts: Vec<Contact> = first.contact().into_iter().collect();
    contacts.extend(rows.filter_map(|mut r| r.contact()));

    Ok(Group {
        id: first.group_id.to_string(),
        name: first.group_name,
        contacts,
    })
}

/// PostgreSQL group repository
#[derive(Clone)]
pub struct PgGroupRepo {
    pool: PgPool,
}

impl PgGroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepo {
    #[tracing::instrument(name = "repo.create_group", skip_all, fields(correlation_id = %ctx, id = %group.id))]
    async fn create(&self, ctx: &RequestContext, group: &Group) -> Result<(), DbError> {
        let id = parse_key(&group.id)?;
        sqlx::query("INSERT INTO groups (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(&group.name)
            .execute(&self.pool)
            .await?;

        tracing::info!("Group created successfully");
        Ok(())
    }

    #[tracing::instrument(name = "repo.read_group", skip_all, fields(correlation_id = %ctx, id = %id))]
    async fn read(&self, ctx: &RequestContext, id: i64) -> Result<Group, DbError> {
        let rows: Vec<GroupMemberRow> = sqlx::query_as(
            r#"
            SELECT
                g.id AS group_id,
                g.name AS group_name,
                c.id AS contact_id,
                c.firstName AS first_name,
                c.lastName AS last_name,
                c.middleName AS middle_name,
                c.phone
            FROM groups g
            LEFT JOIN group_contacts gc ON gc.group_id = g.id
            LEFT JOIN contacts c ON c.id = gc.contact_id
            WHERE g.id = $1
            ORDER BY c.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let group = fold_group(rows)?;
        tracing::info!(members = group.contacts.len(), "Group read successfully");
        Ok(group)
    }

    #[tracing::instrument(name = "repo.add_contact_to_group", skip_all, fields(correlation_id = %ctx, contact_id = contact_id, group_id = group_id))]
    async fn add_contact(
        &self,
        ctx: &RequestContext,
        contact_id: i64,
        group_id: i64,
    ) -> Result<(), DbError> {
        sqlx::query("INSERT INTO group_contacts (group_id, contact_id) VALUES ($1, $2)")
            .bind(group_id)
            .bind(contact_id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Contact added to group successfully");
        Ok(())
    }
}
