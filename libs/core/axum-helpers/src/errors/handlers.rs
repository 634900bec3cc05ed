use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use super::messages;
use crate::envelope::Envelope;

/// Fallback handler for unknown routes.
pub async fn not_found() -> Response {
    Envelope::<Value>::failure(StatusCode::NOT_FOUND, messages::NOT_FOUND_ROUTE).into_response()
}

/// Replacement for axum's plain-text 405 response.
pub async fn method_not_allowed() -> Response {
    Envelope::<Value>::failure(StatusCode::METHOD_NOT_ALLOWED, messages::METHOD_NOT_ALLOWED)
        .into_response()
}
