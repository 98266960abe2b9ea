//! Vault persistence
//!
//! A vault's owner is fixed at insert time; there is no query that
//! changes `creator_id`.

use sqlx::SqlitePool;

use crate::db::models::Vault;
use crate::{time, Result};

pub async fn create_vault(
    pool: &SqlitePool,
    creator_id: i64,
    content_file: &str,
    is_public: bool,
) -> Result<Vault> {
    let vault = sqlx::query_as::<_, Vault>(
        r#"
        INSERT INTO vaults (creator_id, content_file, is_public, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, creator_id, content_file, is_public, created_at
        "#,
    )
    .bind(creator_id)
    .bind(content_file)
    .bind(is_public)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(vault)
}

pub async fn find_vault(pool: &SqlitePool, id: i64) -> Result<Option<Vault>> {
    let vault = sqlx::query_as::<_, Vault>(
        "SELECT id, creator_id, content_file, is_public, created_at FROM vaults WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(vault)
}

/// Every vault, in insertion order
pub async fn list_all_vaults(pool: &SqlitePool) -> Result<Vec<Vault>> {
    let vaults = sqlx::query_as::<_, Vault>(
        "SELECT id, creator_id, content_file, is_public, created_at FROM vaults ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(vaults)
}

/// Vaults owned by one creator, in insertion order
pub async fn list_vaults_for_creator(pool: &SqlitePool, creator_id: i64) -> Result<Vec<Vault>> {
    let vaults = sqlx::query_as::<_, Vault>(
        r#"
        SELECT id, creator_id, content_file, is_public, created_at
        FROM vaults
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(vaults)
}
