//! HTTP middleware for the bookshelf API
//!
//! - Request id propagation and request metrics
//! - JSON normalization of framework-level error responses

pub mod error_response;
pub mod metrics;

pub use error_response::normalize_error_response;
pub use metrics::ObservabilityLayer;
