//! Onboarding status

use axum::{extract::State, Extension, Json};
use creatorhub_common::db::{onboarding, OnboardingStatus, Principal};
use serde::Serialize;
use tracing::info;

use crate::access::VAULT_LIST_PATH;
use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct OnboardingStatusResponse {
    pub status: OnboardingStatus,
}

#[derive(Debug, Serialize)]
pub struct OnboardingCompleteResponse {
    pub message: String,
    pub redirect: String,
    pub status: OnboardingStatus,
}

/// GET /onboarding/
///
/// Creates the status record (incomplete) on first visit.
pub async fn onboarding_status(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<OnboardingStatusResponse>> {
    let status = onboarding::get_or_create_status(&state.db, principal.id).await?;
    info!("User {} viewed their onboarding status.", principal.username);
    Ok(Json(OnboardingStatusResponse { status }))
}

/// POST /onboarding/
pub async fn complete_onboarding(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<OnboardingCompleteResponse>> {
    let status = onboarding::mark_complete(&state.db, principal.id).await?;

    info!("User {} completed onboarding.", principal.username);

    Ok(Json(OnboardingCompleteResponse {
        message: "Onboarding completed successfully.".to_string(),
        redirect: VAULT_LIST_PATH.to_string(),
        status,
    }))
}
