//! Content scheduling
//!
//! `content` is a stored-file reference from the storage backend; the
//! upload itself happens there. `schedule_time` is stored as supplied.

use axum::{extract::State, http::StatusCode, Extension, Json};
use creatorhub_common::db::{schedules, ContentSchedule, Principal};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::forms::{require_field, FormView};
use crate::error::ApiResult;
use crate::AppState;

const FORM_PATH: &str = "/content_scheduling/";
const FIELDS: &[&str] = &["content", "schedule_time"];

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleContentRequest {
    pub content: Option<String>,
    pub schedule_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleContentResponse {
    pub message: String,
    pub redirect: String,
    pub schedule: ContentSchedule,
}

/// GET /content_scheduling/
pub async fn content_scheduling_form(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Json<FormView<ContentSchedule>>> {
    let records = schedules::list_schedules_for_creator(&state.db, principal.id).await?;
    info!("User {} opened the content scheduling form.", principal.username);
    Ok(Json(FormView::new(FIELDS, records)))
}

/// POST /content_scheduling/
pub async fn schedule_content(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    payload: Option<Json<ScheduleContentRequest>>,
) -> ApiResult<(StatusCode, Json<ScheduleContentResponse>)> {
    let form = payload.map(|Json(form)| form).unwrap_or_default();
    let content = require_field(form.content, "content", FORM_PATH)?;
    let schedule_time = require_field(form.schedule_time, "schedule_time", FORM_PATH)?;

    let schedule = schedules::create_schedule(&state.db, principal.id, &content, &schedule_time).await?;

    info!(
        "User {} scheduled new content for {}.",
        principal.username, schedule_time
    );

    Ok((
        StatusCode::CREATED,
        Json(ScheduleContentResponse {
            message: "Content scheduled successfully.".to_string(),
            redirect: FORM_PATH.to_string(),
            schedule,
        }),
    ))
}
