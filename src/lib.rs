//! Bookshelf Core - Catalog Service Backend
//!
//! This crate serves a two-level catalog of genres and the books filed
//! under them over a REST API, with shared-secret request signing on the
//! protected write routes.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod repository;
pub mod server;
pub mod service;
pub mod state;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
