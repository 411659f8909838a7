use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::modules::work_items::core::reference::ReferenceIndex;
use crate::shared::core::primitives::DateRange;
use crate::shell::error::RelayError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDetailsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Serve the reference collections themselves, keyed by id, so the board
/// can populate its edit dropdowns without another five round trips.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<GetDetailsParams>,
) -> Result<Json<ReferenceIndex>, RelayError> {
    let range = DateRange::require(params.start_date, params.end_date)
        .map_err(RelayError::bad_request)?;
    let refs = state.reference.load(&range).await?;
    Ok(Json(refs))
}
