use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::shift::Shift;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivityDefinition {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// The upstream calls these `Locations`; the board shows them as the place
/// a task happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Workplace {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Material {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    pub id: String,
    pub name: String,
}

/// Lookup tables for the enrichment join, keyed by upstream identifier.
/// Rebuilt from scratch on every request; nothing here outlives a response.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReferenceIndex {
    pub activity_definitions: HashMap<String, ActivityDefinition>,
    pub workplaces: HashMap<String, Workplace>,
    pub materials: HashMap<String, Material>,
    pub metrics: HashMap<String, Metric>,
    pub shifts: HashMap<String, Shift>,
}

impl ReferenceIndex {
    pub fn index(
        activity_definitions: Vec<ActivityDefinition>,
        workplaces: Vec<Workplace>,
        materials: Vec<Material>,
        metrics: Vec<Metric>,
        shifts: Vec<Shift>,
    ) -> Self {
        Self {
            activity_definitions: by_id(activity_definitions, |record| record.id.clone()),
            workplaces: by_id(workplaces, |record| record.id.clone()),
            materials: by_id(materials, |record| record.id.clone()),
            metrics: by_id(metrics, |record| record.id.clone()),
            shifts: by_id(shifts, |record| record.id.clone()),
        }
    }
}

fn by_id<T>(records: Vec<T>, id: impl Fn(&T) -> String) -> HashMap<String, T> {
    records
        .into_iter()
        .map(|record| (id(&record), record))
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivityDefinitionsEnvelope {
    pub activity_definitions: Vec<ActivityDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationsEnvelope {
    pub locations: Vec<Workplace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaterialsEnvelope {
    pub materials: Vec<Material>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricsEnvelope {
    pub metrics: Vec<Metric>,
}
