//! Generated recommendations (append-only)

use sqlx::SqlitePool;

use crate::db::models::Recommendation;
use crate::{time, Result};

pub async fn create_recommendation(
    pool: &SqlitePool,
    creator_id: i64,
    recommendation: &str,
) -> Result<Recommendation> {
    let row = sqlx::query_as::<_, Recommendation>(
        r#"
        INSERT INTO recommendations (creator_id, recommendation, timestamp)
        VALUES (?, ?, ?)
        RETURNING id, creator_id, recommendation, timestamp
        "#,
    )
    .bind(creator_id)
    .bind(recommendation)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_recommendations_for_creator(
    pool: &SqlitePool,
    creator_id: i64,
) -> Result<Vec<Recommendation>> {
    let rows = sqlx::query_as::<_, Recommendation>(
        r#"
        SELECT id, creator_id, recommendation, timestamp
        FROM recommendations
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
