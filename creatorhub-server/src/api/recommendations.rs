//! Canned recommendations

use axum::{extract::State, http::StatusCode, Extension, Json};
use creatorhub_common::db::{recommendations, Principal, Recommendation};
use serde::Serialize;
use tracing::info;

use crate::api::forms::FormView;
use crate::error::ApiResult;
use crate::AppState;

pub const RECOMMENDATION_TEXT: &str =
    "We recommend focusing on engaging with your fans by doing live Q&A sessions every week.";

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub message: String,
    pub recommendation: Recommendation,
}

/// GET /ai_recommendations/
pub async fn recommendation_form(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<FormView<Recommendation>>> {
    let records = recommendations::list_recommendations_for_creator(&state.db, principal.id).await?;
    info!("User {} viewed their AI recommendations.", principal.username);
    Ok(Json(FormView::new(&[], records)))
}

/// POST /ai_recommendations/
pub async fn create_recommendation(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<(StatusCode, Json<RecommendationResponse>)> {
    let recommendation =
        recommendations::create_recommendation(&state.db, principal.id, RECOMMENDATION_TEXT).await?;

    info!("User {} received AI recommendation.", principal.username);

    Ok((
        StatusCode::CREATED,
        Json(RecommendationResponse {
            message: "AI recommendation generated successfully.".to_string(),
            recommendation,
        }),
    ))
}
