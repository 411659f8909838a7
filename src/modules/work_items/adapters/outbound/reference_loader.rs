use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::modules::shifts::core::shift::ShiftsEnvelope;
use crate::modules::work_items::core::reference::{
    ActivityDefinitionsEnvelope, LocationsEnvelope, MaterialsEnvelope, MetricsEnvelope,
    ReferenceIndex,
};
use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::{
    UpstreamApi, UpstreamEndpoint, UpstreamError, decode,
};

/// Loads the four static reference collections plus the date-bounded shift
/// list and indexes them by identifier.
pub struct ReferenceLoader {
    api: Arc<dyn UpstreamApi + Send + Sync>,
}

impl ReferenceLoader {
    pub fn new(api: Arc<dyn UpstreamApi + Send + Sync>) -> Self {
        Self { api }
    }

    /// All five lookups run concurrently. The first failure wins; a partial
    /// index is never produced.
    pub async fn load(&self, range: &DateRange) -> Result<ReferenceIndex, UpstreamError> {
        let (activities, locations, materials, metrics, shifts) = tokio::try_join!(
            self.fetch::<ActivityDefinitionsEnvelope>(UpstreamEndpoint::ActivityDefinitions, None),
            self.fetch::<LocationsEnvelope>(UpstreamEndpoint::Locations, None),
            self.fetch::<MaterialsEnvelope>(UpstreamEndpoint::Materials, None),
            self.fetch::<MetricsEnvelope>(UpstreamEndpoint::Metrics, None),
            self.fetch::<ShiftsEnvelope>(UpstreamEndpoint::Shifts, Some(range)),
        )?;

        Ok(ReferenceIndex::index(
            activities.activity_definitions,
            locations.locations,
            materials.materials,
            metrics.metrics,
            shifts.shifts,
        ))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: UpstreamEndpoint,
        range: Option<&DateRange>,
    ) -> Result<T, UpstreamError> {
        decode(self.api.get(endpoint, range).await?)
    }
}
