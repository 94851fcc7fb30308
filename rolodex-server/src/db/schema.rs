//! Table bootstrap for fresh databases
//!
//! Idempotent `CREATE TABLE IF NOT EXISTS` only. There is no version
//! tracking; existing tables are left as they are.

use sqlx::PgPool;

/// Create the contacts, groups and group_contacts tables if missing.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring rolodex tables exist");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id BIGINT PRIMARY KEY,
            firstName TEXT NOT NULL DEFAULT '',
            lastName TEXT NOT NULL DEFAULT '',
            middleName TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id BIGINT PRIMARY KEY,
            name VARCHAR(250) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS group_contacts (
            group_id BIGINT NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            contact_id BIGINT NOT NULL REFERENCES contacts(id) ON DELETE CASCADE,
            PRIMARY KEY (group_id, contact_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
