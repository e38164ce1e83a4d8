//! Genre domain model

use super::schema::{FieldKind, PayloadField, PayloadSchema};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Genre entity. Books refer to their genre by id; a genre holds no list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Input for creating a new genre
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGenreInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl CreateGenreInput {
    pub const SCHEMA: PayloadSchema = PayloadSchema {
        operation: "create genre",
        fields: &[PayloadField::required("name", FieldKind::Text)],
        allow_empty: false,
    };
}
