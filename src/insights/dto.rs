use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;

// BookStatsDto summarizes the catalog; books without a genre count toward
// the totals but are left out of the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookStatsDto {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub genre_breakdown: HashMap<String, usize>,
}

impl From<&[BookEntity]> for BookStatsDto {
    fn from(books: &[BookEntity]) -> Self {
        let borrowed = books.iter().filter(|b| b.is_borrowed).count();
        let mut genre_breakdown: HashMap<String, usize> = HashMap::new();
        for book in books {
            if let Some(genre) = book.genre.as_deref().filter(|g| !g.is_empty()) {
                *genre_breakdown.entry(genre.to_string()).or_insert(0) += 1;
            }
        }
        Self {
            total_books: books.len(),
            available_books: books.len() - borrowed,
            borrowed_books: borrowed,
            genre_breakdown,
        }
    }
}
