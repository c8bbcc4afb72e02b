pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookPatch;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // subset of list() that is not lent out, insertion order preserved
    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>>;

    // atomic find-merge-store of the provided patch fields; the lending
    // state can only change through checkout and give_back
    async fn apply_patch(&self, id: &str, patch: &BookPatch) -> LibraryResult<BookEntity>;

    // atomic Available -> Borrowed transition; a missing book and an
    // already-borrowed book produce the same NotFound outcome
    async fn checkout(&self, id: &str, borrower_id: &str) -> LibraryResult<BookEntity>;

    // atomic Borrowed -> Available transition
    async fn give_back(&self, id: &str) -> LibraryResult<BookEntity>;
}
