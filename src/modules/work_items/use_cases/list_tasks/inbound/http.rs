use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::modules::work_items::core::enriched_task::EnrichedTask;
use crate::shared::core::primitives::DateRange;
use crate::shell::error::RelayError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTasksParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTasksResponse {
    pub work_items: Vec<EnrichedTask>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTasksParams>,
) -> Result<Json<ListTasksResponse>, RelayError> {
    let range = DateRange::require(params.start_date, params.end_date)
        .map_err(RelayError::bad_request)?;
    let work_items = state.list_tasks.handle(&range).await?;
    Ok(Json(ListTasksResponse { work_items }))
}
