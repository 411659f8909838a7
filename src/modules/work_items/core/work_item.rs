use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw work item as served by the upstream `ShiftWorkItems` route. Foreign
/// keys stay unresolved here; enrichment joins them against the reference
/// collections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkItem {
    pub id: String,
    #[serde(default)]
    pub activity_record_id: Option<String>,
    #[serde(default)]
    pub activity_distribution_index: Option<i64>,
    #[serde(default)]
    pub activity_definition_id: String,
    #[serde(default)]
    pub workplace_id: String,
    #[serde(default)]
    pub planned_material_id: String,
    #[serde(default)]
    pub shift_ids: Vec<String>,
    #[serde(default)]
    pub planned_metrics: Vec<MetricValue>,
    #[serde(default)]
    pub actual_production_records: Vec<ProductionRecord>,
    pub current_status: WorkItemStatus,
    #[serde(default)]
    pub primary_resource: Value,
    #[serde(default)]
    pub supporting_resources: Vec<Value>,
    pub planned_quantity: f64,
}

/// Lifecycle of a work item as the upstream spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkItemStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl WorkItemStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// One `{MetricId, Value}` pair before the metric name is resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricValue {
    #[serde(default)]
    pub metric_id: String,
    pub value: f64,
}

/// Actual production record. Only the metrics get resolved; every other
/// field rides along untouched in `rest`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductionRecord {
    #[serde(default)]
    pub actual_metrics: Vec<MetricValue>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkItemsEnvelope {
    pub work_items: Vec<WorkItem>,
}
