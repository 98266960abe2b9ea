//! Per-creator onboarding status
//!
//! One row per creator at most (`creator_id` is the primary key). Both
//! operations are single statements, so concurrent submissions resolve
//! last-write-wins.

use sqlx::SqlitePool;

use crate::db::models::OnboardingStatus;
use crate::Result;

/// Fetch the status row, creating it with `onboarding_complete = false` if absent
pub async fn get_or_create_status(pool: &SqlitePool, creator_id: i64) -> Result<OnboardingStatus> {
    let status = sqlx::query_as::<_, OnboardingStatus>(
        r#"
        INSERT INTO onboarding_status (creator_id, onboarding_complete)
        VALUES (?, 0)
        ON CONFLICT(creator_id) DO UPDATE SET onboarding_complete = onboarding_complete
        RETURNING creator_id, onboarding_complete
        "#,
    )
    .bind(creator_id)
    .fetch_one(pool)
    .await?;

    Ok(status)
}

/// Mark onboarding complete; repeating the call changes nothing
pub async fn mark_complete(pool: &SqlitePool, creator_id: i64) -> Result<OnboardingStatus> {
    let status = sqlx::query_as::<_, OnboardingStatus>(
        r#"
        INSERT INTO onboarding_status (creator_id, onboarding_complete)
        VALUES (?, 1)
        ON CONFLICT(creator_id) DO UPDATE SET onboarding_complete = 1
        RETURNING creator_id, onboarding_complete
        "#,
    )
    .bind(creator_id)
    .fetch_one(pool)
    .await?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::creators::create_creator;
    use crate::db::init_memory_database;

    #[tokio::test]
    async fn test_get_or_create_defaults_to_incomplete() {
        let pool = init_memory_database().await.unwrap();
        let creator = create_creator(&pool, "alice", "", false).await.unwrap();

        let status = get_or_create_status(&pool, creator.id).await.unwrap();
        assert!(!status.onboarding_complete);

        // Second read does not reset or duplicate
        mark_complete(&pool, creator.id).await.unwrap();
        let status = get_or_create_status(&pool, creator.id).await.unwrap();
        assert!(status.onboarding_complete);
    }

    #[tokio::test]
    async fn test_mark_complete_is_idempotent() {
        let pool = init_memory_database().await.unwrap();
        let creator = create_creator(&pool, "alice", "", false).await.unwrap();

        mark_complete(&pool, creator.id).await.unwrap();
        let status = mark_complete(&pool, creator.id).await.unwrap();
        assert!(status.onboarding_complete);

        let rows: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM onboarding_status WHERE creator_id = ?",
        )
        .bind(creator.id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(rows, 1);
    }
}
