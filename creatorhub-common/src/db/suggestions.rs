//! Action suggestions (append-only)

use sqlx::SqlitePool;

use crate::db::models::ActionSuggestion;
use crate::{time, Result};

pub async fn create_suggestion(
    pool: &SqlitePool,
    creator_id: i64,
    action_description: &str,
    projected_outcome: &str,
) -> Result<ActionSuggestion> {
    let suggestion = sqlx::query_as::<_, ActionSuggestion>(
        r#"
        INSERT INTO action_suggestions (creator_id, action_description, projected_outcome, timestamp)
        VALUES (?, ?, ?, ?)
        RETURNING id, creator_id, action_description, projected_outcome, timestamp
        "#,
    )
    .bind(creator_id)
    .bind(action_description)
    .bind(projected_outcome)
    .bind(time::now())
    .fetch_one(pool)
    .await?;

    Ok(suggestion)
}

pub async fn list_suggestions_for_creator(
    pool: &SqlitePool,
    creator_id: i64,
) -> Result<Vec<ActionSuggestion>> {
    let suggestions = sqlx::query_as::<_, ActionSuggestion>(
        r#"
        SELECT id, creator_id, action_description, projected_outcome, timestamp
        FROM action_suggestions
        WHERE creator_id = ?
        ORDER BY id
        "#,
    )
    .bind(creator_id)
    .fetch_all(pool)
    .await?;

    Ok(suggestions)
}
