//! Business logic layer

pub mod catalog;

pub use catalog::CatalogService;
