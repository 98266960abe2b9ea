//! Automation flows (append-only)

use sqlx::SqlitePool;

use crate::db::models::AutomationFlow;
use crate::{time, Result};

pub async fn create_flow(
    pool: &SqlitePool,
    creator_id: i64,
    trigger_event: &str,
    action_taken: &str,
) -> Result<AutomationFlow> {
    let flow = sqlx::query_as::<_, AutomationFlow>(
        r#"
        INSERT INTO automation_flows (creator_id, trigger_event, action_taken, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, creator_id, trigger_event, action_taken, created_at
        "#,
    )
    .bind(creator_id)
    .bind(trigger_event)
    .bind(action_taken)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(flow)
}

pub async fn list_flows_for_creator(pool: &SqlitePool, creator_id: i64) -> Result<Vec<AutomationFlow>> {
    let flows = sqlx::query_as::<_, AutomationFlow>(
        r#"
        SELECT id, creator_id, trigger_event, action_taken, created_at
        FROM automation_flows
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(flows)
}
