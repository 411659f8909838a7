use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::modules::work_items::core::work_item::WorkItemStatus;
use crate::modules::work_items::use_cases::update_task::command::{
    UpdateDetail, UpdateWorkItemRecords,
};
use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamEndpoint, UpstreamError};

/// Update request as the task modal posts it. The client never gets to pick
/// the record id; the relay stamps the task id from the query string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub details: Vec<UpdateTaskDetail>,
    pub current_status: WorkItemStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTaskDetail {
    #[serde(default)]
    pub activity_record_external_id: Value,
    #[serde(default)]
    pub activity_distribution_index: Value,
    #[serde(default)]
    pub actual_production_records: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum UpdateTaskError {
    #[error("Details must contain at least one entry")]
    EmptyDetails,

    #[error("ActualProductionRecords must contain at least one record")]
    EmptyProductionRecords,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

pub struct UpdateTaskHandler {
    api: Arc<dyn UpstreamApi + Send + Sync>,
}

impl UpdateTaskHandler {
    pub fn new(api: Arc<dyn UpstreamApi + Send + Sync>) -> Self {
        Self { api }
    }

    /// Rebuild the first detail around the authoritative task id and relay
    /// it upstream. Extra details are dropped, matching what the upstream
    /// route accepts.
    pub async fn handle(
        &self,
        task_id: &str,
        request: UpdateTaskRequest,
    ) -> Result<Value, UpdateTaskError> {
        let Some(detail) = request.details.into_iter().next() else {
            return Err(UpdateTaskError::EmptyDetails);
        };
        if detail.actual_production_records.is_empty() {
            return Err(UpdateTaskError::EmptyProductionRecords);
        }

        let update = UpdateWorkItemRecords {
            details: vec![UpdateDetail {
                activity_record_id: task_id.to_string(),
                activity_record_external_id: detail.activity_record_external_id,
                activity_distribution_index: detail.activity_distribution_index,
                actual_production_records: detail.actual_production_records,
            }],
            current_status: request.current_status,
        };
        let body = serde_json::to_value(&update)
            .map_err(|err| UpstreamError::Request(err.to_string()))?;

        Ok(self
            .api
            .post(UpstreamEndpoint::UpdateActualProductionRecords, &body)
            .await?)
    }
}
