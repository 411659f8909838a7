use chrono::{DateTime, SecondsFormat, Utc};

use crate::modules::shifts::core::shift::Shift;
use crate::modules::work_items::core::enriched_task::{
    EnrichedProductionRecord, EnrichedTask, ResolvedMetric,
};
use crate::modules::work_items::core::reference::ReferenceIndex;
use crate::modules::work_items::core::work_item::{MetricValue, WorkItem};

/// Name substituted whenever a foreign key misses its reference record.
pub const UNKNOWN: &str = "Unknown";
/// Color substituted when a task's activity definition is missing.
pub const FALLBACK_COLOR: &str = "#000000";

/// Flatten raw work items into display-ready tasks: resolve activity,
/// workplace, material and metric names against the reference index and
/// expand every work item into one task per entry in `ShiftIds`.
///
/// A work item with an empty `ShiftIds` list contributes nothing to the
/// output.
pub fn enrich_work_items(work_items: Vec<WorkItem>, refs: &ReferenceIndex) -> Vec<EnrichedTask> {
    work_items
        .into_iter()
        .flat_map(|work_item| expand_work_item(work_item, refs))
        .collect()
}

fn expand_work_item(work_item: WorkItem, refs: &ReferenceIndex) -> Vec<EnrichedTask> {
    let activity = refs
        .activity_definitions
        .get(&work_item.activity_definition_id);
    let activity_type = activity.map_or_else(|| UNKNOWN.to_string(), |a| a.name.clone());
    let activity_color = activity.map_or_else(|| FALLBACK_COLOR.to_string(), |a| a.color.clone());
    let location = refs
        .workplaces
        .get(&work_item.workplace_id)
        .map_or_else(|| UNKNOWN.to_string(), |workplace| workplace.name.clone());
    let material = refs
        .materials
        .get(&work_item.planned_material_id)
        .map_or_else(|| UNKNOWN.to_string(), |material| material.name.clone());

    let planned_metrics = resolve_metrics(&work_item.planned_metrics, refs);
    let production_records: Vec<EnrichedProductionRecord> = work_item
        .actual_production_records
        .iter()
        .map(|record| {
            let mut rest = record.rest.clone();
            // A raw `Material` key would collide with the resolved name.
            rest.remove("Material");
            EnrichedProductionRecord {
                material: material.clone(),
                actual_metrics: resolve_metrics(&record.actual_metrics, refs),
                rest,
            }
        })
        .collect();

    work_item
        .shift_ids
        .iter()
        .map(|shift_id| {
            let shift = refs.shifts.get(shift_id);
            let (start_date_time, finish_date_time) = shift
                .and_then(|shift| shift.window())
                .map(|(start, finish)| (iso_utc(start), iso_utc(finish)))
                .unwrap_or_else(|| (UNKNOWN.to_string(), UNKNOWN.to_string()));

            EnrichedTask {
                id: work_item.id.clone(),
                activity_record_id: work_item.activity_record_id.clone(),
                activity_distribution_index: work_item.activity_distribution_index,
                shift_id: shift_id.clone(),
                shift_name: shift.map_or_else(|| UNKNOWN.to_string(), |shift| shift.display_name()),
                activity_type: activity_type.clone(),
                activity_color: activity_color.clone(),
                location: location.clone(),
                start_date_time,
                finish_date_time,
                planned_quantity: work_item.planned_quantity,
                material: material.clone(),
                planned_metrics: planned_metrics.clone(),
                actual_production_records: production_records.clone(),
                current_status: work_item.current_status,
                is_complete: work_item.current_status.is_complete(),
                primary_resource: work_item.primary_resource.clone(),
                supporting_resources: work_item.supporting_resources.clone(),
            }
        })
        .collect()
}

fn resolve_metrics(metrics: &[MetricValue], refs: &ReferenceIndex) -> Vec<ResolvedMetric> {
    metrics
        .iter()
        .map(|entry| ResolvedMetric {
            metric_id: entry.metric_id.clone(),
            metric: refs
                .metrics
                .get(&entry.metric_id)
                .map_or_else(|| UNKNOWN.to_string(), |metric| metric.name.clone()),
            value: entry.value,
        })
        .collect()
}

/// The board's JavaScript expects `Date.toISOString` shaped timestamps:
/// millisecond precision with a literal `Z` suffix.
fn iso_utc(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
