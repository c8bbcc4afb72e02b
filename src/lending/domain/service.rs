use std::sync::Arc;
use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::lending::domain::LendingService;

pub(crate) struct LendingServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl LendingServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl LendingService for LendingServiceImpl {
    // A missing book and an already-borrowed book are deliberately the same
    // NotFound outcome; the boundary shows one message for both.
    async fn borrow_book(&self, id: &str, borrower_id: &str) -> LibraryResult<BookDto> {
        self.book_repository.checkout(id, borrower_id).await.map(|b| BookDto::from(&b))
    }

    async fn return_book(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.give_back(id).await.map(|b| BookDto::from(&b))
    }
}
