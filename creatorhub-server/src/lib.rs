//! creatorhub-server library
//!
//! HTTP backend for the creator content-management tool: vault access with
//! an audit trail for elevated reads, plus thin per-feature record
//! endpoints.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod access;
pub mod api;
pub mod error;
pub mod logging;
pub mod security;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// Every route except `/health` sits behind the authentication middleware.
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::get;

    let protected = Router::new()
        .route("/vault/", get(api::list_vaults).post(api::create_vault))
        .route("/vault/:vault_id/", get(api::read_vault))
        .route(
            "/admin/vault/:vault_id/",
            get(api::admin_read_vault).post(api::admin_read_vault),
        )
        .route("/fan_management/", get(api::fan_management_dashboard))
        .route(
            "/action_suggestions/",
            get(api::action_suggestion_form).post(api::create_action_suggestion),
        )
        .route("/analytics/", get(api::analytics_dashboard))
        .route(
            "/automation/",
            get(api::automation_form).post(api::create_automation_flow),
        )
        .route(
            "/content_scheduling/",
            get(api::content_scheduling_form).post(api::schedule_content),
        )
        .route(
            "/onboarding/",
            get(api::onboarding_status).post(api::complete_onboarding),
        )
        .route(
            "/ai_recommendations/",
            get(api::recommendation_form).post(api::create_recommendation),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth_middleware,
        ));

    let public = Router::new().merge(api::health_routes());

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
