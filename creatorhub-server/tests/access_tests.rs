//! Vault access-control and audit-trail tests
//!
//! - Listing returns a vault iff the requester owns it or is elevated
//! - Elevated non-owner reads append exactly one access-log entry
//! - Owner reads append nothing
//! - Denied reads return 403 (not 404), no data, and append nothing
//! - A read whose audit entry cannot be written fails without data

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use creatorhub_common::db::{access_log, vaults, AccessLogEntry};
use helpers::{create_test_app, create_user, get, post_empty, send};
use serde_json::Value;

fn vault_ids(body: &Value) -> Vec<i64> {
    body["vaults"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_listing_visibility() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let bob = create_user(&pool, "bob", false).await;
    let mona = create_user(&pool, "mona", true).await;

    let a1 = vaults::create_vault(&pool, alice.creator.id, "creator_vault/a1.png", false).await.unwrap();
    let b1 = vaults::create_vault(&pool, bob.creator.id, "creator_vault/b1.png", true).await.unwrap();
    let a2 = vaults::create_vault(&pool, alice.creator.id, "creator_vault/a2.png", true).await.unwrap();

    let (status, body) = send(&app, get("/vault/", Some(&alice.token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vault_ids(&body), vec![a1.id, a2.id]);

    // Public flag does not widen visibility
    let (_, body) = send(&app, get("/vault/", Some(&bob.token))).await;
    assert_eq!(vault_ids(&body), vec![b1.id]);

    let (_, body) = send(&app, get("/vault/", Some(&mona.token))).await;
    assert_eq!(vault_ids(&body), vec![a1.id, b1.id, a2.id]);

    // Listing is not an audited read
    assert_eq!(access_log::count_entries(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_elevated_admin_read_logs_exactly_one_entry() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let mona = create_user(&pool, "mona", true).await;
    let vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/7.png", false)
        .await
        .unwrap();

    let before = Utc::now();
    let (status, body) = send(
        &app,
        get(&format!("/admin/vault/{}/", vault.id), Some(&mona.token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vault"]["id"].as_i64(), Some(vault.id));
    assert_eq!(body["vault"]["content_file"], "creator_vault/7.png");
    assert_eq!(body["message"], "Successfully accessed the creator vault.");

    let entries: Vec<AccessLogEntry> = access_log::list_for_vault(&pool, vault.id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].admin_id, mona.creator.id);
    assert_eq!(entries[0].vault_id, vault.id);
    assert!(entries[0].access_time >= before - Duration::seconds(1));
    assert!(entries[0].access_time <= Utc::now() + Duration::seconds(1));
    assert_eq!(body["access_log_entry"]["id"].as_i64(), Some(entries[0].id));
}

#[tokio::test]
async fn test_every_elevated_read_is_logged_separately() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let mona = create_user(&pool, "mona", true).await;
    let vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/7.png", false)
        .await
        .unwrap();

    let admin_uri = format!("/admin/vault/{}/", vault.id);
    let read_uri = format!("/vault/{}/", vault.id);

    let (status, _) = send(&app, get(&admin_uri, Some(&mona.token))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, post_empty(&admin_uri, Some(&mona.token))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, get(&read_uri, Some(&mona.token))).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(access_log::list_for_vault(&pool, vault.id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_owner_read_is_not_logged() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let mona = create_user(&pool, "mona", true).await;
    let alice_vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/a.png", false)
        .await
        .unwrap();
    let mona_vault = vaults::create_vault(&pool, mona.creator.id, "creator_vault/m.png", false)
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        get(&format!("/vault/{}/", alice_vault.id), Some(&alice.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vault"]["id"].as_i64(), Some(alice_vault.id));
    assert!(body["access_log_entry"].is_null());

    // Elevated owner reading their own vault through the admin path
    let (status, body) = send(
        &app,
        get(&format!("/admin/vault/{}/", mona_vault.id), Some(&mona.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access_log_entry"].is_null());

    assert_eq!(access_log::count_entries(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_standard_non_owner_is_denied_without_log() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let bob = create_user(&pool, "bob", false).await;
    let vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/7.png", false)
        .await
        .unwrap();

    for uri in [
        format!("/vault/{}/", vault.id),
        format!("/admin/vault/{}/", vault.id),
    ] {
        let (status, body) = send(&app, get(&uri, Some(&bob.token))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{}", uri);
        assert_eq!(body["error"]["code"], "PERMISSION_DENIED");
        assert_eq!(
            body["error"]["message"],
            "You do not have permission to access this vault."
        );
        assert_eq!(body["error"]["redirect"], "/vault/");
        assert!(body.get("vault").is_none(), "vault data leaked on {}", uri);
    }

    assert_eq!(access_log::count_entries(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_standard_owner_cannot_use_admin_path() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/a.png", false)
        .await
        .unwrap();

    let (status, _) = send(
        &app,
        get(&format!("/admin/vault/{}/", vault.id), Some(&alice.token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_vault_is_not_found_for_permitted_paths() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let mona = create_user(&pool, "mona", true).await;

    let (status, body) = send(&app, get("/vault/999/", Some(&alice.token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = send(&app, get("/admin/vault/999/", Some(&mona.token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Non-elevated callers are refused before the lookup
    let (status, _) = send(&app, get("/admin/vault/999/", Some(&alice.token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    assert_eq!(access_log::count_entries(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_demoted_admin_loses_access() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let mona = create_user(&pool, "mona", true).await;
    let vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/a.png", false)
        .await
        .unwrap();

    creatorhub_common::db::creators::set_elevated(&pool, mona.creator.id, false)
        .await
        .unwrap();

    let (status, _) = send(
        &app,
        get(&format!("/vault/{}/", vault.id), Some(&mona.token)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(access_log::count_entries(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_audit_write_fails_the_read() {
    let (app, pool) = create_test_app().await;
    let alice = create_user(&pool, "alice", false).await;
    let mona = create_user(&pool, "mona", true).await;
    let vault = vaults::create_vault(&pool, alice.creator.id, "creator_vault/7.png", false)
        .await
        .unwrap();

    sqlx::query(
        r#"
        CREATE TRIGGER access_log_reject_insert
        BEFORE INSERT ON access_log
        BEGIN
            SELECT RAISE(ABORT, 'access_log unavailable');
        END
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    let (status, body) = send(
        &app,
        get(&format!("/admin/vault/{}/", vault.id), Some(&mona.token)),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"]["message"], "Internal server error");
    assert!(body.get("vault").is_none());
    assert!(!body.to_string().contains("creator_vault/7.png"));
    assert_eq!(access_log::count_entries(&pool).await.unwrap(), 0);

    // Owner reads never write an entry, so they are unaffected
    let (status, body) = send(
        &app,
        get(&format!("/vault/{}/", vault.id), Some(&alice.token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vault"]["id"].as_i64(), Some(vault.id));
}
