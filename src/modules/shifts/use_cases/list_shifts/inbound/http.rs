use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamEndpoint};
use crate::shell::error::RelayError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListShiftsParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// The roster view wants the upstream payload untouched, so this relays the
/// raw `Shifts` envelope instead of the typed model.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListShiftsParams>,
) -> Result<Json<Value>, RelayError> {
    let range = DateRange::require(params.start_date, params.end_date)
        .map_err(RelayError::bad_request)?;
    let payload = state.api.get(UpstreamEndpoint::Shifts, Some(&range)).await?;
    Ok(Json(payload))
}
