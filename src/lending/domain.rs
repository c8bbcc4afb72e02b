pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// LendingService drives the Available <-> Borrowed state machine.
#[async_trait]
pub(crate) trait LendingService: Sync + Send {
    async fn borrow_book(&self, id: &str, borrower_id: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, id: &str) -> LibraryResult<BookDto>;
}
