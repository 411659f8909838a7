use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::shared::infrastructure::upstream::UpstreamError;

/// Wire shape of every error the relay returns. `error` carries the raw
/// upstream body when there is one.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

#[derive(Debug)]
pub enum RelayError {
    BadRequest(String),
    Upstream(UpstreamError),
}

impl RelayError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<UpstreamError> for RelayError {
    fn from(err: UpstreamError) -> Self {
        Self::Upstream(err)
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::BadRequest(message) => {
                tracing::warn!(message = %message, "rejected request");
            }
            RelayError::Upstream(err) => {
                tracing::error!(error = %err, "upstream call failed");
            }
        }

        let (status, body) = match self {
            RelayError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody { message, error: None })
            }
            RelayError::Upstream(UpstreamError::Status { status, body }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorBody {
                    message: "An error occurred.".to_string(),
                    error: Some(body),
                },
            ),
            RelayError::Upstream(UpstreamError::NoResponse(detail)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "No response received from the server.".to_string(),
                    error: Some(Value::String(detail)),
                },
            ),
            RelayError::Upstream(UpstreamError::Request(detail)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "An error occurred while setting up the request.".to_string(),
                    error: Some(Value::String(detail)),
                },
            ),
            RelayError::Upstream(UpstreamError::Decode(detail)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Received an unreadable response from the server.".to_string(),
                    error: Some(Value::String(detail)),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
