use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::Deserialize;
use serde_json::Value;

use crate::modules::work_items::use_cases::update_task::handler::{
    UpdateTaskError, UpdateTaskRequest,
};
use crate::shell::error::RelayError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    pub task_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<UpdateTaskParams>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let task_id = params
        .task_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RelayError::bad_request("Task ID is required"))?;
    let Json(request) = body.map_err(|rejection| RelayError::bad_request(rejection.body_text()))?;

    match state.update_task.handle(&task_id, request).await {
        Ok(response) => Ok(Json(response)),
        Err(UpdateTaskError::Upstream(err)) => Err(err.into()),
        Err(validation) => Err(RelayError::bad_request(validation.to_string())),
    }
}
