pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDraft, BookDto, BookPatch};
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: &str, patch: &BookPatch) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<()>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
}
