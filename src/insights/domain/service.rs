use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::insights::domain::{InsightsService, RecommendationPolicy};
use crate::insights::dto::BookStatsDto;

pub(crate) struct InsightsServiceImpl {
    max_recommendations: usize,
    book_repository: Arc<dyn BookRepository>,
    recommendation_policy: Box<dyn RecommendationPolicy>,
}

impl InsightsServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>,
                      recommendation_policy: Box<dyn RecommendationPolicy>) -> Self {
        Self {
            max_recommendations: config.max_recommendations,
            book_repository,
            recommendation_policy,
        }
    }
}

#[async_trait]
impl InsightsService for InsightsServiceImpl {
    async fn find_available_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_available().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn book_stats(&self) -> LibraryResult<BookStatsDto> {
        let books = self.book_repository.list().await?;
        Ok(BookStatsDto::from(books.as_slice()))
    }

    async fn recommend_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        let selected = self.recommendation_policy.select(books.as_slice(), self.max_recommendations);
        Ok(selected.iter().map(BookDto::from).collect())
    }
}
