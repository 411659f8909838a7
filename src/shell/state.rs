use std::sync::Arc;

use crate::modules::work_items::adapters::outbound::reference_loader::ReferenceLoader;
use crate::modules::work_items::use_cases::list_tasks::handler::ListTasksHandler;
use crate::modules::work_items::use_cases::update_task::handler::UpdateTaskHandler;
use crate::shared::infrastructure::upstream::http::{HttpUpstreamApi, UpstreamConfig};
use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamError};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn UpstreamApi + Send + Sync>,
    pub reference: Arc<ReferenceLoader>,
    pub list_tasks: Arc<ListTasksHandler>,
    pub update_task: Arc<UpdateTaskHandler>,
}

impl AppState {
    /// Wire every use case handler onto one shared upstream port instance.
    pub fn new(api: Arc<dyn UpstreamApi + Send + Sync>) -> Self {
        let reference = Arc::new(ReferenceLoader::new(api.clone()));
        Self {
            list_tasks: Arc::new(ListTasksHandler::new(api.clone(), reference.clone())),
            update_task: Arc::new(UpdateTaskHandler::new(api.clone())),
            reference,
            api,
        }
    }
}

/// Production wiring: one reqwest-backed client shared by every handler.
pub fn build(config: UpstreamConfig) -> Result<AppState, UpstreamError> {
    let api = HttpUpstreamApi::new(config)?;
    Ok(AppState::new(Arc::new(api)))
}
