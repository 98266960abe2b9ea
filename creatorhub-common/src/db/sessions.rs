//! Bearer session persistence
//!
//! Only token hashes are stored; the plain token is returned once, at
//! issue time.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::api::auth::{generate_session_token, hash_session_token};
use crate::db::models::Creator;
use crate::{time, Result};

/// Issue a new session token for a creator
pub async fn issue_session(pool: &SqlitePool, creator_id: i64, ttl_hours: i64) -> Result<String> {
    let token = generate_session_token();

    sqlx::query(
        "INSERT INTO sessions (token_hash, creator_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
    )
    .bind(hash_session_token(&token))
    .bind(creator_id)
    .bind(time::now())
    .bind(time::expiry_after_hours(ttl_hours))
    .execute(pool)
    .await?;

    Ok(token)
}

/// Resolve a plain token to its creator
///
/// Unknown and expired tokens both resolve to `None`.
pub async fn resolve_session(pool: &SqlitePool, token: &str) -> Result<Option<Creator>> {
    let row = sqlx::query_as::<_, (DateTime<Utc>, i64, String, String, bool, DateTime<Utc>)>(
        r#"
        SELECT s.expires_at, c.id, c.username, c.email, c.is_elevated, c.created_at
        FROM sessions s
        JOIN creators c ON c.id = s.creator_id
        WHERE s.token_hash = ?
        "#,
    )
    .bind(hash_session_token(token))
    .fetch_optional(pool)
    .await?;

    let Some((expires_at, id, username, email, is_elevated, created_at)) = row else {
        return Ok(None);
    };

    if expires_at <= time::now() {
        return Ok(None);
    }

    Ok(Some(Creator {
        id,
        username,
        email,
        is_elevated,
        created_at,
    }))
}

/// Revoke a single token
pub async fn revoke_session(pool: &SqlitePool, token: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
        .bind(hash_session_token(token))
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Remove every expired session, returning how many were dropped
///
/// `expires_at` is RFC 3339 text with a fixed `+00:00` offset, so a text
/// comparison orders it chronologically.
pub async fn purge_expired_sessions(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
        .bind(time::now())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
