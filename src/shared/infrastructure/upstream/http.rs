// Reqwest implementation of the UpstreamApi port.
//
// Purpose
// - Talk to the live scheduling API over HTTPS.
//
// Responsibilities
// - Authenticate every call with the static `ApiToken` header.
// - Bound date-ranged lookups with `StartDate`/`EndDate` query parameters.
// - Mirror upstream failures into the relay's error taxonomy.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::shared::core::primitives::DateRange;
use crate::shared::infrastructure::upstream::{UpstreamApi, UpstreamEndpoint, UpstreamError};

const API_TOKEN_HEADER: &str = "ApiToken";

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_token: String,
    /// The scheduling environment serves a certificate the relay host does
    /// not trust, so verification is skipped unless configured otherwise.
    pub accept_invalid_certs: bool,
}

pub struct HttpUpstreamApi {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpUpstreamApi {
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|err| UpstreamError::Request(err.to_string()))?;
        Ok(Self { client, config })
    }

    fn url(&self, endpoint: UpstreamEndpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }
}

#[async_trait]
impl UpstreamApi for HttpUpstreamApi {
    async fn get(
        &self,
        endpoint: UpstreamEndpoint,
        range: Option<&DateRange>,
    ) -> Result<Value, UpstreamError> {
        let mut request = self
            .client
            .get(self.url(endpoint))
            .header(ACCEPT, "application/json")
            .header(API_TOKEN_HEADER, &self.config.api_token);

        if let Some(range) = range {
            request = request.query(&[
                ("StartDate", range.start_date.as_str()),
                ("EndDate", range.end_date.as_str()),
            ]);
        }

        let response = request.send().await.map_err(transport_error)?;
        read_json(response).await
    }

    async fn post(
        &self,
        endpoint: UpstreamEndpoint,
        body: &Value,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(self.url(endpoint))
            .header(ACCEPT, "application/json")
            .header(API_TOKEN_HEADER, &self.config.api_token)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}

/// A request that failed before leaving the client is a setup problem;
/// anything after that counts as the upstream never answering.
fn transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_builder() {
        UpstreamError::Request(err.to_string())
    } else {
        UpstreamError::NoResponse(err.to_string())
    }
}

/// Read the body as JSON, falling back to a plain string so non-JSON error
/// pages survive the trip back to the browser. Non-2xx statuses carry the
/// decoded body inside the error.
async fn read_json(response: reqwest::Response) -> Result<Value, UpstreamError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    if !status.is_success() {
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}
