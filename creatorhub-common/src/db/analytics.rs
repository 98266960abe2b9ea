//! Analytics snapshots (append-only)

use serde_json::Value;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::db::models::AnalyticsSnapshot;
use crate::{time, Result};

/// Metrics captured in one snapshot
#[derive(Debug, Clone)]
pub struct NewSnapshot {
    pub engagement_rate: f64,
    pub fan_growth: i64,
    pub revenue: f64,
    pub content_performance: Value,
}

pub async fn record_snapshot(
    pool: &SqlitePool,
    creator_id: i64,
    snapshot: NewSnapshot,
) -> Result<AnalyticsSnapshot> {
    let row = sqlx::query_as::<_, AnalyticsSnapshot>(
        r#"
        INSERT INTO analytics_snapshots
            (creator_id, engagement_rate, fan_growth, revenue, content_performance, timestamp)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, creator_id, engagement_rate, fan_growth, revenue, content_performance, timestamp
        "#,
    )
    .bind(creator_id)
    .bind(snapshot.engagement_rate)
    .bind(snapshot.fan_growth)
    .bind(snapshot.revenue)
    .bind(Json(snapshot.content_performance))
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_snapshots_for_creator(
    pool: &SqlitePool,
    creator_id: i64,
) -> Result<Vec<AnalyticsSnapshot>> {
    let snapshots = sqlx::query_as::<_, AnalyticsSnapshot>(
        r#"
        SELECT id, creator_id, engagement_rate, fan_growth, revenue, content_performance, timestamp
        FROM analytics_snapshots
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(snapshots)
}
