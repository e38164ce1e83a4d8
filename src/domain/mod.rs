//! Domain models for Bookshelf Core

pub mod book;
pub mod genre;
pub mod schema;

pub use book::*;
pub use genre::*;
pub use schema::{parse_payload, FieldKind, PayloadField, PayloadSchema};
