//! Fan records

use serde_json::Value;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::db::models::Fan;
use crate::{time, Result};

pub async fn create_fan(
    pool: &SqlitePool,
    creator_id: i64,
    fan_name: &str,
    fan_data: Value,
    segment: &str,
) -> Result<Fan> {
    let fan = sqlx::query_as::<_, Fan>(
        r#"
        INSERT INTO fans (creator_id, fan_name, fan_data, segment, last_interaction)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, creator_id, fan_name, fan_data, segment, last_interaction
        "#,
    )
    .bind(creator_id)
    .bind(fan_name)
    .bind(Json(fan_data))
    .bind(segment)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(fan)
}

/// Fans belonging to one creator, in insertion order
pub async fn list_fans_for_creator(pool: &SqlitePool, creator_id: i64) -> Result<Vec<Fan>> {
    let fans = sqlx::query_as::<_, Fan>(
        r#"
        SELECT id, creator_id, fan_name, fan_data, segment, last_interaction
        FROM fans
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(fans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::creators::create_creator;
    use crate::db::init_memory_database;
    use serde_json::json;

    #[tokio::test]
    async fn test_fan_data_round_trips_as_json() {
        let pool = init_memory_database().await.unwrap();
        let creator = create_creator(&pool, "alice", "", false).await.unwrap();

        create_fan(&pool, creator.id, "sam", json!({"tips": 3, "messages": ["hi"]}), "whale")
            .await
            .unwrap();

        let fans = list_fans_for_creator(&pool, creator.id).await.unwrap();
        assert_eq!(fans.len(), 1);
        assert_eq!(fans[0].fan_data.0["tips"], 3);
        assert_eq!(fans[0].segment, "whale");
    }
}
