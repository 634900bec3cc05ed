//! Reusable OpenAPI response types for consistent API documentation.

use serde::Serialize;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::{ToResponse, ToSchema};

/// Documentation shape of [`crate::Envelope`].
///
/// `data` is the operation payload; it is omitted when the operation
/// returns nothing or fails.
#[derive(Serialize, ToSchema)]
pub struct EnvelopeSchema {
    /// Mirrors the HTTP status code of the outcome
    #[schema(example = 200)]
    pub status: u16,
    /// Human-readable outcome message
    #[schema(example = "Success to get items")]
    pub messages: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "messages": "Request validation failed",
        "data": {
            "stok": [{
                "code": "range",
                "message": "stok must not be negative",
                "params": {"min": 0.0, "value": -1}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub EnvelopeSchema);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed body or parameter",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "messages": "Invalid id: abc"
    })
)]
pub struct BadRequestResponse(pub EnvelopeSchema);

#[derive(ToResponse)]
#[response(
    description = "Operation failed in the service or storage layer",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "messages": "Failed to get item : 9999"
    })
)]
pub struct OperationFailedResponse(pub EnvelopeSchema);
