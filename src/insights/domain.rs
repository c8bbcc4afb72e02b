pub mod policy;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;
use crate::insights::dto::BookStatsDto;

// InsightsService answers read-only questions over the catalog; none of its
// operations mutate the store.
#[async_trait]
pub(crate) trait InsightsService: Sync + Send {
    async fn find_available_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn book_stats(&self) -> LibraryResult<BookStatsDto>;
    async fn recommend_books(&self) -> LibraryResult<Vec<BookDto>>;
}

// RecommendationPolicy is the swappable selection strategy behind
// recommend_books; implementations must not mutate the input.
pub(crate) trait RecommendationPolicy: Sync + Send {
    fn select(&self, books: &[BookEntity], limit: usize) -> Vec<BookEntity>;
}
