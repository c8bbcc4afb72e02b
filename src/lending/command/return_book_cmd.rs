use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;

pub(crate) struct ReturnBookCommand {
    lending_service: Box<dyn LendingService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) book_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.lending_service.return_book(req.book_id.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::lending::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::lending::factory;

    lazy_static! {
        static ref SUT_CMDS : AsyncOnce<(AddBookCommand, BorrowBookCommand, ReturnBookCommand)> = AsyncOnce::new(async {
                let repo = create_book_repository(RepositoryStore::Memory).await;
                let add_svc = crate::catalog::factory::create_catalog_service(&Configuration::new(), repo.clone()).await;
                let borrow_svc = factory::create_lending_service(&Configuration::new(), repo.clone()).await;
                let return_svc = factory::create_lending_service(&Configuration::new(), repo).await;
                (AddBookCommand::new(add_svc), BorrowBookCommand::new(borrow_svc), ReturnBookCommand::new(return_svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_return_book() {
        let (add_cmd, borrow_cmd, return_cmd) = SUT_CMDS.get().await;

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", "author", None))
            .await.expect("should add book");
        let _ = borrow_cmd.execute(BorrowBookCommandRequest::new(added.book.id.as_str(), "patron1"))
            .await.expect("should borrow book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new(added.book.id.to_string()))
            .await.expect("should return book");
        assert_eq!(false, res.book.is_borrowed);
        assert_eq!(None, res.book.borrower_id);
    }

    #[tokio::test]
    async fn test_should_fail_return_of_unborrowed_book() {
        let (add_cmd, _, return_cmd) = SUT_CMDS.get().await;

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", "author", None))
            .await.expect("should add book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new(added.book.id)).await;
        assert!(res.is_err());
    }
}
