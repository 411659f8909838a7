use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::shared::core::primitives::DateRange;

/// Routes of the third-party scheduling API the relay talks to. The variant
/// names follow the board's vocabulary; `path` carries the upstream spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamEndpoint {
    ShiftWorkItems,
    Shifts,
    ActivityDefinitions,
    Locations,
    Materials,
    Metrics,
    StartWorkItem,
    FinishWorkItem,
    UpdateActualProductionRecords,
}

impl UpstreamEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::ShiftWorkItems => "ShiftWorkItems",
            Self::Shifts => "Shifts",
            Self::ActivityDefinitions => "ActivityDefinitions",
            Self::Locations => "Locations",
            Self::Materials => "Materials",
            Self::Metrics => "Metrics",
            Self::StartWorkItem => "StartWorkItem",
            Self::FinishWorkItem => "FinishWorkItem",
            Self::UpdateActualProductionRecords => "UpdateWorkitemActualProductionRecords",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpstreamError {
    #[error("upstream responded with status {status}")]
    Status { status: u16, body: Value },

    #[error("no response received from upstream: {0}")]
    NoResponse(String),

    #[error("failed to set up upstream request: {0}")]
    Request(String),

    #[error("failed to decode upstream payload: {0}")]
    Decode(String),
}

#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Fetch a resource, optionally bounded by a `StartDate`/`EndDate` pair.
    async fn get(
        &self,
        endpoint: UpstreamEndpoint,
        range: Option<&DateRange>,
    ) -> Result<Value, UpstreamError>;

    /// Relay a JSON body upstream and return the raw response payload.
    async fn post(
        &self,
        endpoint: UpstreamEndpoint,
        body: &Value,
    ) -> Result<Value, UpstreamError>;
}

/// Parse a raw payload into a typed collection, folding serde failures into
/// the upstream error taxonomy.
pub fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, UpstreamError> {
    serde_json::from_value(payload).map_err(|err| UpstreamError::Decode(err.to_string()))
}

pub mod http;
pub mod in_memory;
