//! Analytics dashboard

use axum::{extract::State, Extension, Json};
use creatorhub_common::db::{analytics, AnalyticsSnapshot, Principal};
use serde::Serialize;
use tracing::info;

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub analytics: Vec<AnalyticsSnapshot>,
}

/// GET /analytics/
pub async fn analytics_dashboard(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<AnalyticsResponse>> {
    let analytics = analytics::list_snapshots_for_creator(&state.db, principal.id).await?;

    info!("User {} accessed their analytics dashboard.", principal.username);

    Ok(Json(AnalyticsResponse { analytics }))
}
