//! REST API handlers and shared response types

pub mod book;
pub mod genre;
pub mod health;
pub mod metrics;
pub mod reset;

use crate::error::{AppError, Result};
use axum::http::{Method, Uri};
use serde::{Deserialize, Serialize};

/// Message response (for reset, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse a path id. Anything but a positive integer names no resource.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound(format!(
            "{} '{}' not found",
            resource, raw
        ))),
    }
}

/// Fallback for paths (and methods on known paths) that match no operation
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {} {}", method, uri.path()))
}
