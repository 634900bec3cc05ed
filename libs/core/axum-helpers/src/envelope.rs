//! The `{status, messages, data}` response body shared by every endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uniform response wrapper.
///
/// ```json
/// { "status": 200, "messages": "Success to get item", "data": { ... } }
/// ```
///
/// `data` is omitted from the JSON when it is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub messages: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Status 200 without data.
    pub fn ok(messages: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            messages: messages.into(),
            data: None,
        }
    }

    /// Non-success envelope carrying `status`.
    pub fn failure(status: StatusCode, messages: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            messages: messages.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// The envelope status as an HTTP status code (500 if out of range).
    pub fn http_status(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl<T: Serialize> Envelope<T> {
    /// Serialize the envelope with the transport status chosen by `policy`.
    pub fn into_response_with(self, policy: StatusPolicy) -> Response {
        let status = match policy {
            StatusPolicy::Mirror => self.http_status(),
            StatusPolicy::AlwaysOk => StatusCode::OK,
        };

        (status, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        self.into_response_with(StatusPolicy::Mirror)
    }
}

/// How the HTTP status of a service-produced envelope is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// HTTP status equals the envelope status.
    #[default]
    Mirror,
    /// HTTP 200 for every envelope; clients read `status` from the body.
    AlwaysOk,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mirror" => Ok(StatusPolicy::Mirror),
            "always_ok" | "always-ok" => Ok(StatusPolicy::AlwaysOk),
            other => Err(format!(
                "unknown status policy '{}', expected 'mirror' or 'always_ok'",
                other
            )),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Mirror => f.write_str("mirror"),
            StatusPolicy::AlwaysOk => f.write_str("always_ok"),
        }
    }
}
