//! Shared test helpers: in-memory app, creators with tokens, request builders

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use creatorhub_common::db::{creators, init_memory_database, sessions, Creator};
use creatorhub_server::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot`

/// Test helper: app backed by a fresh in-memory database
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = init_memory_database()
        .await
        .expect("Failed to create in-memory database");
    let app = build_router(AppState::new(pool.clone()));
    (app, pool)
}

/// A creator plus a valid bearer token
pub struct TestUser {
    pub creator: Creator,
    pub token: String,
}

pub async fn create_user(pool: &SqlitePool, username: &str, elevated: bool) -> TestUser {
    let creator = creators::create_creator(pool, username, &format!("{}@example.com", username), elevated)
        .await
        .expect("Failed to create creator");
    let token = sessions::issue_session(pool, creator.id, 1)
        .await
        .expect("Failed to issue session");
    TestUser { creator, token }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn post_empty(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Send one request and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}
