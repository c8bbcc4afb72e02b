use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is the wire representation of a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub is_borrowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrower_id: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn version(&self) -> i64 {
        0
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.clone(),
            is_borrowed: other.is_borrowed,
            borrower_id: other.borrower_id.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

// BookDraft carries the caller-supplied fields for a new book; the store
// assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, genre: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.map(str::to_string),
        }
    }
}

impl From<&BookDraft> for BookEntity {
    fn from(other: &BookDraft) -> Self {
        BookEntity::new(other.title.as_str(), other.author.as_str(), other.genre.as_deref())
    }
}

// BookPatch is a partial field set, absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}
