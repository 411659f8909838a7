// In memory implementation of the UpstreamApi port.
//
// Purpose
// - Support handler and endpoint tests without a live scheduling API.
//
// Responsibilities
// - Serve canned JSON responses per endpoint.
// - Record every call so tests can assert on ranges and relayed bodies.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamEndpoint, UpstreamError};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: UpstreamEndpoint,
    pub range: Option<DateRange>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct InMemoryUpstream {
    responses: Mutex<HashMap<UpstreamEndpoint, Result<Value, UpstreamError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl InMemoryUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_response(
        &self,
        endpoint: UpstreamEndpoint,
        response: Result<Value, UpstreamError>,
    ) {
        self.responses.lock().await.insert(endpoint, response);
    }

    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn respond(&self, endpoint: UpstreamEndpoint) -> Result<Value, UpstreamError> {
        self.responses
            .lock()
            .await
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| {
                Err(UpstreamError::NoResponse(format!(
                    "no canned response for {endpoint:?}"
                )))
            })
    }
}

#[async_trait]
impl UpstreamApi for InMemoryUpstream {
    async fn get(
        &self,
        endpoint: UpstreamEndpoint,
        range: Option<&DateRange>,
    ) -> Result<Value, UpstreamError> {
        self.calls.lock().await.push(RecordedCall {
            endpoint,
            range: range.cloned(),
            body: None,
        });
        self.respond(endpoint).await
    }

    async fn post(
        &self,
        endpoint: UpstreamEndpoint,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        self.calls.lock().await.push(RecordedCall {
            endpoint,
            range: None,
            body: Some(body.clone()),
        });
        self.respond(endpoint).await
    }
}
