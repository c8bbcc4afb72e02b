use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookPatch;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps all books in process memory behind a single
// read-write lock; every mutation runs its whole check-and-set under the
// write lock so transitions never interleave.
pub(crate) struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        books.push(entity.clone());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|b| b.book_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("book with id {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.book_id != id);
        Ok(before - books.len())
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.iter().filter(|b| !b.is_borrowed).cloned().collect())
    }

    async fn apply_patch(&self, id: &str, patch: &BookPatch) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        if let Some(existing) = books.iter_mut().find(|b| b.book_id == id) {
            existing.apply_patch(patch);
            existing.version += 1;
            existing.updated_at = Utc::now().naive_utc();
            Ok(existing.clone())
        } else {
            Err(LibraryError::not_found(
                format!("book with id {} not found", id).as_str()))
        }
    }

    async fn checkout(&self, id: &str, borrower_id: &str) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.book_id == id) {
            Some(book) if !book.is_borrowed => {
                book.lend_to(borrower_id);
                book.version += 1;
                book.updated_at = Utc::now().naive_utc();
                Ok(book.clone())
            }
            Some(book) => {
                Err(LibraryError::not_found(
                    format!("book with id {} is already borrowed", book.book_id).as_str()))
            }
            None => {
                Err(LibraryError::not_found(
                    format!("book with id {} not found", id).as_str()))
            }
        }
    }

    async fn give_back(&self, id: &str) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|b| b.book_id == id) {
            Some(book) if book.is_borrowed => {
                book.hand_back();
                book.version += 1;
                book.updated_at = Utc::now().naive_utc();
                Ok(book.clone())
            }
            Some(book) => {
                Err(LibraryError::not_found(
                    format!("book with id {} is not currently borrowed", book.book_id).as_str()))
            }
            None => {
                Err(LibraryError::not_found(
                    format!("book with id {} not found", id).as_str()))
            }
        }
    }
}
