use serde::Serialize;
use serde_json::{Map, Value};

use crate::modules::work_items::core::work_item::WorkItemStatus;

/// A work item materialized against one of its shifts, foreign keys already
/// resolved to display names. `StartDateTime`/`FinishDateTime` are strings
/// because a missing shift degrades them to the `Unknown` sentinel instead
/// of failing the whole board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrichedTask {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_distribution_index: Option<i64>,
    pub shift_id: String,
    pub shift_name: String,
    pub activity_type: String,
    pub activity_color: String,
    pub location: String,
    pub start_date_time: String,
    pub finish_date_time: String,
    pub planned_quantity: f64,
    pub material: String,
    pub planned_metrics: Vec<ResolvedMetric>,
    pub actual_production_records: Vec<EnrichedProductionRecord>,
    pub current_status: WorkItemStatus,
    pub is_complete: bool,
    pub primary_resource: Value,
    pub supporting_resources: Vec<Value>,
}

/// `{MetricId, Value}` with the metric's display name joined in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedMetric {
    pub metric_id: String,
    pub metric: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrichedProductionRecord {
    pub material: String,
    pub actual_metrics: Vec<ResolvedMetric>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
