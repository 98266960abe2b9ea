//! Action suggestions

use axum::{extract::State, http::StatusCode, Extension, Json};
use creatorhub_common::db::{suggestions, ActionSuggestion, Principal};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::forms::{require_field, FormView};
use crate::error::ApiResult;
use crate::AppState;

const FORM_PATH: &str = "/action_suggestions/";
const FIELDS: &[&str] = &["action_description"];

/// Projected effect of a suggested action
pub fn projected_outcome(action_description: &str) -> String {
    format!(
        "If you {}, you'll likely see a 15% boost in engagement!",
        action_description
    )
}

#[derive(Debug, Default, Deserialize)]
pub struct ActionSuggestionRequest {
    pub action_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ActionSuggestionResponse {
    pub message: String,
    pub action_description: String,
    pub projected_outcome: String,
    pub suggestion: ActionSuggestion,
}

/// GET /action_suggestions/
pub async fn action_suggestion_form(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<FormView<ActionSuggestion>>> {
    let records = suggestions::list_suggestions_for_creator(&state.db, principal.id).await?;
    info!("User {} opened the action suggestion form.", principal.username);
    Ok(Json(FormView::new(FIELDS, records)))
}

/// POST /action_suggestions/
pub async fn create_action_suggestion(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    payload: Option<Json<ActionSuggestionRequest>>,
) -> ApiResult<(StatusCode, Json<ActionSuggestionResponse>)> {
    let form = payload.map(|Json(form)| form).unwrap_or_default();
    let action_description = require_field(form.action_description, "action_description", FORM_PATH)?;
    let projected_outcome = projected_outcome(&action_description);

    let suggestion = suggestions::create_suggestion(
        &state.db,
        principal.id,
        &action_description,
        &projected_outcome,
    )
    .await?;

    info!(
        "User {} submitted an action suggestion: {}.",
        principal.username, action_description
    );

    Ok((
        StatusCode::CREATED,
        Json(ActionSuggestionResponse {
            message: format!("Action suggestion recorded: {}.", action_description),
            action_description,
            projected_outcome,
            suggestion,
        }),
    ))
}
