use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::BookPatch;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity abstracts a catalog item owned by the book store; the store
// assigns its identifier at creation and it never changes afterwards.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub is_borrowed: bool,
    // Some iff is_borrowed is true
    pub borrower_id: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, genre: Option<&str>) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.map(str::to_string),
            is_borrowed: false,
            borrower_id: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // merges provided patch fields, absent fields keep their current value
    pub fn apply_patch(&mut self, patch: &BookPatch) {
        if let Some(ref title) = patch.title {
            self.title = title.to_string();
        }
        if let Some(ref author) = patch.author {
            self.author = author.to_string();
        }
        if let Some(ref genre) = patch.genre {
            self.genre = Some(genre.to_string());
        }
    }

    pub fn lend_to(&mut self, borrower_id: &str) {
        self.is_borrowed = true;
        self.borrower_id = Some(borrower_id.to_string());
    }

    pub fn hand_back(&mut self) {
        self.is_borrowed = false;
        self.borrower_id = None;
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        if self.is_borrowed {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }

    fn is_available(&self) -> bool {
        !self.is_borrowed
    }
}
