//! Fan management dashboard

use axum::{extract::State, Extension, Json};
use creatorhub_common::db::{fans, Fan, Principal};
use serde::Serialize;
use tracing::info;

use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FanDashboardResponse {
    pub fans: Vec<Fan>,
}

/// GET /fan_management/
pub async fn fan_management_dashboard(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<FanDashboardResponse>> {
    let fans = fans::list_fans_for_creator(&state.db, principal.id).await?;

    info!("User {} accessed the fan management dashboard.", principal.username);

    Ok(Json(FanDashboardResponse { fans }))
}
