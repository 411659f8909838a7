use serde::Serialize;
use serde_json::Value;

use crate::modules::work_items::core::work_item::WorkItemStatus;

/// Body posted to the upstream `UpdateWorkitemActualProductionRecords`
/// route. The upstream accepts exactly one detail per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateWorkItemRecords {
    pub details: Vec<UpdateDetail>,
    pub current_status: WorkItemStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDetail {
    pub activity_record_id: String,
    pub activity_record_external_id: Value,
    pub activity_distribution_index: Value,
    pub actual_production_records: Vec<Value>,
}
