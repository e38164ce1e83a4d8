//! Data access layer (Repository pattern)

pub mod catalog;

pub use catalog::{Catalog, CatalogRepository, InMemoryCatalogRepository};
