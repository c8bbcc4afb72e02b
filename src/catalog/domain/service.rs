use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDraft, BookDto, BookPatch};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = BookEntity::from(draft);
        let _ = self.book_repository.create(&book).await?;
        Ok(BookDto::from(&book))
    }

    async fn update_book(&self, id: &str, patch: &BookPatch) -> LibraryResult<BookDto> {
        self.book_repository.apply_patch(id, patch).await.map(|b| BookDto::from(&b))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let removed = self.book_repository.delete(id).await?;
        if removed == 0 {
            return Err(LibraryError::not_found(
                format!("book with id {} not found", id).as_str()));
        }
        Ok(())
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::{BookDraft, BookPatch};
    use crate::books::factory::create_book_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::lending::domain::LendingService;

    async fn sut_service() -> Box<dyn CatalogService> {
        let repo = create_book_repository(RepositoryStore::Memory).await;
        factory::create_catalog_service(&Configuration::new(), repo).await
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = sut_service().await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "author", Some("SciFi")))
            .await.expect("should add book");

        let loaded = catalog_svc.find_book_by_id(book.id.as_str()).await.expect("should return book");
        assert_eq!(book, loaded);
        assert_eq!(false, loaded.is_borrowed);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = sut_service().await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "author", Some("SciFi")))
            .await.expect("should add book");

        let patch = BookPatch { title: Some("new title".to_string()), ..BookPatch::default() };
        let updated = catalog_svc.update_book(book.id.as_str(), &patch).await.expect("should update book");
        assert_eq!("new title", updated.title.as_str());
        assert_eq!(book.author, updated.author);
        assert_eq!(book.genre, updated.genre);
        assert_eq!(book.id, updated.id);
    }

    #[tokio::test]
    async fn test_should_keep_lending_state_when_updating_borrowed_book() {
        let repo = create_book_repository(RepositoryStore::Memory).await;
        let catalog_svc = factory::create_catalog_service(&Configuration::new(), repo.clone()).await;
        let lending_svc = crate::lending::factory::create_lending_service(&Configuration::new(), repo).await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "author", Some("SciFi")))
            .await.expect("should add book");
        let _ = lending_svc.borrow_book(book.id.as_str(), "patron1").await.expect("should borrow book");

        let patch = BookPatch { title: Some("new title".to_string()), ..BookPatch::default() };
        let updated = catalog_svc.update_book(book.id.as_str(), &patch).await.expect("should update book");
        assert_eq!("new title", updated.title.as_str());
        assert_eq!(true, updated.is_borrowed);
        assert_eq!(Some("patron1".to_string()), updated.borrower_id);
    }

    #[tokio::test]
    async fn test_should_fail_update_of_missing_book() {
        let catalog_svc = sut_service().await;

        let _ = catalog_svc.add_book(&BookDraft::new("test book", "author", None))
            .await.expect("should add book");

        let patch = BookPatch { title: Some("new title".to_string()), ..BookPatch::default() };
        let res = catalog_svc.update_book("no-such-id", &patch).await;
        assert!(res.is_err());
        assert_eq!(1, catalog_svc.find_all_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = sut_service().await;

        let book = catalog_svc.add_book(&BookDraft::new("test book", "author", None))
            .await.expect("should add book");

        let _ = catalog_svc.remove_book(book.id.as_str()).await.expect("should remove book");

        let loaded = catalog_svc.find_book_by_id(book.id.as_str()).await;
        assert!(loaded.is_err());
    }

    #[tokio::test]
    async fn test_should_fail_remove_of_missing_book() {
        let catalog_svc = sut_service().await;

        let _ = catalog_svc.add_book(&BookDraft::new("test book", "author", None))
            .await.expect("should add book");

        let res = catalog_svc.remove_book("no-such-id").await;
        assert!(res.is_err());
        assert_eq!(1, catalog_svc.find_all_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_find_all_books() {
        let catalog_svc = sut_service().await;

        let first = catalog_svc.add_book(&BookDraft::new("first", "author", None))
            .await.expect("should add book");
        let second = catalog_svc.add_book(&BookDraft::new("second", "author", None))
            .await.expect("should add book");

        let books = catalog_svc.find_all_books().await.expect("should list books");
        assert_eq!(vec![first.id, second.id],
                   books.iter().map(|b| b.id.to_string()).collect::<Vec<String>>());
    }
}
