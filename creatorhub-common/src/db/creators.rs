//! Creator (principal) persistence
//!
//! Deleting a creator is the one multi-statement write in the system: every
//! dependent row is removed explicitly, children before parents, inside a
//! single transaction.

use sqlx::SqlitePool;
use tracing::info;

use crate::db::models::Creator;
use crate::{time, Error, Result};

/// Insert a new creator
pub async fn create_creator(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    is_elevated: bool,
) -> Result<Creator> {
    if username.trim().is_empty() {
        return Err(Error::InvalidInput("username must not be empty".to_string()));
    }

    let creator = sqlx::query_as::<_, Creator>(
        r#"
        INSERT INTO creators (username, email, is_elevated, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, username, email, is_elevated, created_at
        "#,
    )
    .bind(username.trim())
    .bind(email.trim())
    .bind(is_elevated)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(creator)
}

pub async fn find_creator(pool: &SqlitePool, id: i64) -> Result<Option<Creator>> {
    let creator = sqlx::query_as::<_, Creator>(
        "SELECT id, username, email, is_elevated, created_at FROM creators WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(creator)
}

pub async fn find_creator_by_username(pool: &SqlitePool, username: &str) -> Result<Option<Creator>> {
    let creator = sqlx::query_as::<_, Creator>(
        "SELECT id, username, email, is_elevated, created_at FROM creators WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(creator)
}

/// Switch a creator between the standard and elevated role
pub async fn set_elevated(pool: &SqlitePool, id: i64, is_elevated: bool) -> Result<()> {
    let result = sqlx::query("UPDATE creators SET is_elevated = ? WHERE id = ?")
        .bind(is_elevated)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("creator {}", id)));
    }
    Ok(())
}

/// Delete a creator and everything that depends on it
///
/// Removes access-log rows on the creator's vaults and rows where the
/// creator was the accessing principal, then the creator's vaults, fans,
/// suggestions, analytics, flows, schedules, onboarding status,
/// recommendations and sessions, and finally the creator.
pub async fn delete_creator(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let access_rows = sqlx::query(
        r#"
        DELETE FROM access_log
        WHERE admin_id = ?
           OR vault_id IN (SELECT id FROM vaults WHERE creator_id = ?)
        "#,
    )
    .bind(id)
    .bind(id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let mut dependent_rows = 0;
    for table in [
        "vaults",
        "fans",
        "action_suggestions",
        "analytics_snapshots",
        "automation_flows",
        "content_schedules",
        "onboarding_status",
        "recommendations",
        "sessions",
    ] {
        // Table names come from the fixed list above
        let sql = format!("DELETE FROM {} WHERE creator_id = ?", table);
        dependent_rows += sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    let deleted = sqlx::query("DELETE FROM creators WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        tx.rollback().await?;
        return Err(Error::NotFound(format!("creator {}", id)));
    }

    tx.commit().await?;

    info!(
        "Deleted creator {} ({} access log rows, {} dependent rows)",
        id, access_rows, dependent_rows
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_database;

    #[tokio::test]
    async fn test_create_and_find_creator() {
        let pool = init_memory_database().await.unwrap();

        let created = create_creator(&pool, "alice", "alice@example.com", false)
            .await
            .unwrap();
        assert!(!created.is_elevated);

        let by_id = find_creator(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = find_creator_by_username(&pool, "alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        assert!(find_creator_by_username(&pool, "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let pool = init_memory_database().await.unwrap();
        create_creator(&pool, "alice", "a@example.com", false).await.unwrap();

        let result = create_creator(&pool, "alice", "b@example.com", false).await;
        assert!(matches!(result, Err(Error::Database(_))));
    }

    #[tokio::test]
    async fn test_set_elevated_toggles_role() {
        let pool = init_memory_database().await.unwrap();
        let creator = create_creator(&pool, "mona", "", false).await.unwrap();

        set_elevated(&pool, creator.id, true).await.unwrap();
        let reloaded = find_creator(&pool, creator.id).await.unwrap().unwrap();
        assert!(reloaded.is_elevated);

        assert!(matches!(set_elevated(&pool, 999, true).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_creator_is_not_found() {
        let pool = init_memory_database().await.unwrap();
        assert!(matches!(delete_creator(&pool, 42).await, Err(Error::NotFound(_))));
    }
}
