use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::error::{BookError, BookResult};

/// Book entity as exposed over the API
///
/// Empty fields are left out of the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": "65f1c0ffee0000000000beef", "title": "Dune", "author": "Frank Herbert"}))]
pub struct Book {
    /// Store-assigned identifier, 24 hex characters
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
}

/// Stored shape of a book in MongoDB
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDocument {
    /// Omitted on insert so the server assigns it
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
}

/// DTO for creating a new book
///
/// An `id` in the request body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[schema(example = json!({"title": "Dune", "author": "Frank Herbert"}))]
pub struct CreateBook {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
}

/// DTO for a partial update
///
/// Absent, `null` and empty fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[schema(example = json!({"author": "F. Herbert"}))]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Parse a path id into an ObjectId
pub fn parse_object_id(id: &str) -> BookResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| BookError::InvalidId(id.to_string()))
}

impl Book {
    /// Overwrite the fields present in `changes`
    pub fn apply_update(&mut self, changes: UpdateBook) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

impl UpdateBook {
    /// Fields of this patch that are non-empty and differ from `existing`.
    pub fn staged_changes(&self, existing: &Book) -> UpdateBook {
        fn stage(requested: &Option<String>, current: &str) -> Option<String> {
            requested
                .as_deref()
                .filter(|value| !value.is_empty() && *value != current)
                .map(str::to_string)
        }

        UpdateBook {
            title: stage(&self.title, &existing.title),
            author: stage(&self.author, &existing.author),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: doc.title,
            author: doc.author,
        }
    }
}

impl From<CreateBook> for BookDocument {
    fn from(input: CreateBook) -> Self {
        Self {
            id: None,
            title: input.title,
            author: input.author,
        }
    }
}
