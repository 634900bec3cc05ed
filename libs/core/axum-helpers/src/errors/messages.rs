//! Standard messages for envelopes produced outside the domain services.

pub const VALIDATION_FAILED: &str = "Request validation failed";
pub const NOT_FOUND_ROUTE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
