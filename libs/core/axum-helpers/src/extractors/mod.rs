//! Custom extractors for Axum handlers.
//!
//! Rejections are rendered as envelopes, so handlers never leak axum's
//! plain-text error bodies to clients.

pub mod id_path;
pub mod query_params;
pub mod validated_json;

pub use id_path::IdPath;
pub use query_params::QueryParams;
pub use validated_json::ValidatedJson;
