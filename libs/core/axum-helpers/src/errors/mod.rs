pub mod handlers;
pub mod messages;
pub mod responses;

use crate::envelope::Envelope;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

/// Request-level failures raised before a handler reaches the service.
///
/// Every variant renders as an [`Envelope`] whose `status` equals the
/// HTTP status, so malformed input never produces a bare-text body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::PathExtractorRejection(e) => e.status(),
            AppError::QueryExtractorRejection(e) => e.status(),
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn into_envelope(self) -> Envelope<Value> {
        let status = self.status();

        match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                Envelope::failure(status, e.body_text())
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!("Path extraction error: {:?}", e);
                Envelope::failure(status, e.body_text())
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!("Query extraction error: {:?}", e);
                Envelope::failure(status, e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                Envelope::failure(status, messages::VALIDATION_FAILED)
                    .with_data(validation_details(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                Envelope::failure(status, msg)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_envelope().into_response()
    }
}

/// Per-field `{code, message, params}` lists keyed by field name.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let details = errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let entries: Vec<Value> = errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    Value::Object(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(range(min = 0))]
        count: i32,
    }

    #[test]
    fn test_validation_error_envelope_lists_fields() {
        let errors = Sample { count: -1 }.validate().unwrap_err();
        let envelope = AppError::from(errors).into_envelope();

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.messages, messages::VALIDATION_FAILED);
        let data = envelope.data.unwrap();
        assert_eq!(data["count"][0]["code"], "range");
    }

    #[test]
    fn test_bad_request_keeps_message() {
        let envelope = AppError::BadRequest("Invalid id: abc".to_string()).into_envelope();
        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.messages, "Invalid id: abc");
    }
}
