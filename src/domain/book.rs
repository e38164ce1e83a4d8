//! Book domain model

use super::schema::{FieldKind, PayloadField, PayloadSchema};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Book entity.
///
/// `id` is unique across the whole catalog, not just within a genre, so a
/// book addressed under the wrong genre can be told apart from a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub genre_id: u64,
}

impl Book {
    /// Overwrite exactly the attributes present in `input`.
    pub fn apply(&mut self, input: &UpdateBookInput) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(author) = &input.author {
            self.author = author.clone();
        }
        if let Some(genre_id) = input.genre_id {
            self.genre_id = genre_id;
        }
    }
}

/// Input for creating a book. The genre comes from the request path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateBookInput {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub author: String,
}

impl CreateBookInput {
    pub const SCHEMA: PayloadSchema = PayloadSchema {
        operation: "create book",
        fields: &[
            PayloadField::required("title", FieldKind::Text),
            PayloadField::required("author", FieldKind::Text),
        ],
        allow_empty: false,
    };
}

/// Partial update of a book
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBookInput {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub author: Option<String>,
    #[validate(range(min = 1))]
    pub genre_id: Option<u64>,
}

impl UpdateBookInput {
    pub const SCHEMA: PayloadSchema = PayloadSchema {
        operation: "update book",
        fields: &[
            PayloadField::optional("title", FieldKind::Text),
            PayloadField::optional("author", FieldKind::Text),
            PayloadField::optional("genreId", FieldKind::Integer),
        ],
        allow_empty: false,
    };
}
