//! Automation flows

use axum::{extract::State, http::StatusCode, Extension, Json};
use creatorhub_common::db::{automation, AutomationFlow, Principal};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::forms::{require_field, FormView};
use crate::error::ApiResult;
use crate::AppState;

const FORM_PATH: &str = "/automation/";
const FIELDS: &[&str] = &["trigger_event", "action_taken"];

#[derive(Debug, Default, Deserialize)]
pub struct AutomationFlowRequest {
    pub trigger_event: Option<String>,
    pub action_taken: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AutomationFlowResponse {
    pub message: String,
    pub redirect: String,
    pub flow: AutomationFlow,
}

/// GET /automation/
pub async fn automation_form(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<FormView<AutomationFlow>>> {
    let records = automation::list_flows_for_creator(&state.db, principal.id).await?;
    info!("User {} opened the automation form.", principal.username);
    Ok(Json(FormView::new(FIELDS, records)))
}

/// POST /automation/
pub async fn create_automation_flow(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    payload: Option<Json<AutomationFlowRequest>>,
) -> ApiResult<(StatusCode, Json<AutomationFlowResponse>)> {
    let form = payload.map(|Json(form)| form).unwrap_or_default();
    let trigger_event = require_field(form.trigger_event, "trigger_event", FORM_PATH)?;
    let action_taken = require_field(form.action_taken, "action_taken", FORM_PATH)?;

    let flow = automation::create_flow(&state.db, principal.id, &trigger_event, &action_taken).await?;

    info!(
        "User {} created an automation flow: Trigger - {}, Action - {}.",
        principal.username, trigger_event, action_taken
    );

    Ok((
        StatusCode::CREATED,
        Json(AutomationFlowResponse {
            message: "Automation flow created successfully.".to_string(),
            redirect: FORM_PATH.to_string(),
            flow,
        }),
    ))
}
