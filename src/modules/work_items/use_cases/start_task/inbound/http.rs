use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::Value;

use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamEndpoint};
use crate::shell::error::RelayError;
use crate::shell::state::AppState;

/// Relay the start payload untouched; the upstream owns the state machine
/// and its response goes straight back to the board.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, RelayError> {
    let Json(body) = body.map_err(|rejection| RelayError::bad_request(rejection.body_text()))?;
    let response = state.api.post(UpstreamEndpoint::StartWorkItem, &body).await?;
    Ok(Json(response))
}
