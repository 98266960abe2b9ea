//! Audit trail of elevated vault reads
//!
//! Append-only: entries are inserted and read, never updated. The schema
//! rejects updates with a trigger.

use sqlx::SqlitePool;

use crate::db::models::AccessLogEntry;
use crate::{time, Result};

/// Append one entry; every call creates a new row
pub async fn record_access(pool: &SqlitePool, admin_id: i64, vault_id: i64) -> Result<AccessLogEntry> {
    let entry = sqlx::query_as::<_, AccessLogEntry>(
        r#"
        INSERT INTO access_log (admin_id, vault_id, access_time)
        VALUES (?, ?, ?)
        RETURNING id, admin_id, vault_id, access_time
        "#,
    )
    .bind(admin_id)
    .bind(vault_id)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn list_for_vault(pool: &SqlitePool, vault_id: i64) -> Result<Vec<AccessLogEntry>> {
    let entries = sqlx::query_as::<_, AccessLogEntry>(
        "SELECT id, admin_id, vault_id, access_time FROM access_log WHERE vault_id = ? ORDER BY id",
    )
    .bind(vault_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn count_entries(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM access_log")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::creators::create_creator;
    use crate::db::init_memory_database;
    use crate::db::vaults::create_vault;

    #[tokio::test]
    async fn test_entries_are_not_deduplicated() {
        let pool = init_memory_database().await.unwrap();
        let owner = create_creator(&pool, "alice", "", false).await.unwrap();
        let admin = create_creator(&pool, "mona", "", true).await.unwrap();
        let vault = create_vault(&pool, owner.id, "creator_vault/a.png", false)
            .await
            .unwrap();

        record_access(&pool, admin.id, vault.id).await.unwrap();
        record_access(&pool, admin.id, vault.id).await.unwrap();

        let entries = list_for_vault(&pool, vault.id).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.admin_id == admin.id));
        assert_eq!(count_entries(&pool).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_entries_cannot_be_updated() {
        let pool = init_memory_database().await.unwrap();
        let owner = create_creator(&pool, "alice", "", false).await.unwrap();
        let admin = create_creator(&pool, "mona", "", true).await.unwrap();
        let vault = create_vault(&pool, owner.id, "creator_vault/a.png", false)
            .await
            .unwrap();
        let entry = record_access(&pool, admin.id, vault.id).await.unwrap();

        let result = sqlx::query("UPDATE access_log SET admin_id = ? WHERE id = ?")
            .bind(owner.id)
            .bind(entry.id)
            .execute(&pool)
            .await;

        assert!(result.is_err());
    }
}
