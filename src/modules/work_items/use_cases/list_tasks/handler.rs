use std::sync::Arc;

use crate::modules::work_items::adapters::outbound::reference_loader::ReferenceLoader;
use crate::modules::work_items::core::enrich::enrich_work_items;
use crate::modules::work_items::core::enriched_task::EnrichedTask;
use crate::modules::work_items::core::work_item::WorkItemsEnvelope;
use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::{
    UpstreamApi, UpstreamEndpoint, UpstreamError, decode,
};

/// Fetches the raw work items for a date range and joins them against a
/// freshly loaded reference index.
pub struct ListTasksHandler {
    api: Arc<dyn UpstreamApi + Send + Sync>,
    reference: Arc<ReferenceLoader>,
}

impl ListTasksHandler {
    pub fn new(api: Arc<dyn UpstreamApi + Send + Sync>, reference: Arc<ReferenceLoader>) -> Self {
        Self { api, reference }
    }

    pub async fn handle(&self, range: &DateRange) -> Result<Vec<EnrichedTask>, UpstreamError> {
        let payload = self
            .api
            .get(UpstreamEndpoint::ShiftWorkItems, Some(range))
            .await?;
        let envelope: WorkItemsEnvelope = decode(payload)?;
        let refs = self.reference.load(range).await?;
        Ok(enrich_work_items(envelope.work_items, &refs))
    }
}
