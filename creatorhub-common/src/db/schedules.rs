//! Content schedules
//!
//! `schedule_time` is stored as the caller supplied it.

use sqlx::SqlitePool;

use crate::db::models::ContentSchedule;
use crate::{time, Result};

pub async fn create_schedule(
    pool: &SqlitePool,
    creator_id: i64,
    content: &str,
    schedule_time: &str,
) -> Result<ContentSchedule> {
    let schedule = sqlx::query_as::<_, ContentSchedule>(
        r#"
        INSERT INTO content_schedules (creator_id, content, schedule_time, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, creator_id, content, schedule_time, created_at
        "#,
    )
    .bind(creator_id)
    .bind(content)
    .bind(schedule_time)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}

pub async fn list_schedules_for_creator(
    pool: &SqlitePool,
    creator_id: i64,
) -> Result<Vec<ContentSchedule>> {
    let schedules = sqlx::query_as::<_, ContentSchedule>(
        r#"
        SELECT id, creator_id, content, schedule_time, created_at
        FROM content_schedules
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(schedules)
}
