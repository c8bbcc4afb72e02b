use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::lending::domain::LendingService;

pub(crate) struct BorrowBookCommand {
    lending_service: Box<dyn LendingService>,
}

impl BorrowBookCommand {
    pub(crate) fn new(lending_service: Box<dyn LendingService>) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BorrowBookCommandRequest {
    #[serde(default)]
    pub book_id: String,
    pub borrower_id: String,
}

impl BorrowBookCommandRequest {
    pub fn new(book_id: &str, borrower_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            borrower_id: borrower_id.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.lending_service.borrow_book(req.book_id.as_str(), req.borrower_id.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
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
    use crate::lending::factory;

    lazy_static! {
        static ref SUT_CMDS : AsyncOnce<(AddBookCommand, BorrowBookCommand)> = AsyncOnce::new(async {
                let repo = create_book_repository(RepositoryStore::Memory).await;
                let add_svc = crate::catalog::factory::create_catalog_service(&Configuration::new(), repo.clone()).await;
                let borrow_svc = factory::create_lending_service(&Configuration::new(), repo).await;
                (AddBookCommand::new(add_svc), BorrowBookCommand::new(borrow_svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_borrow_book() {
        let (add_cmd, borrow_cmd) = SUT_CMDS.get().await;

        let added = add_cmd.execute(AddBookCommandRequest::new("test book", "author", None))
            .await.expect("should add book");
        let res = borrow_cmd.execute(BorrowBookCommandRequest::new(added.book.id.as_str(), "patron1"))
            .await.expect("should borrow book");
        assert_eq!(true, res.book.is_borrowed);
        assert_eq!(Some("patron1".to_string()), res.book.borrower_id);
    }

    #[tokio::test]
    async fn test_should_fail_borrow_of_missing_book() {
        let (_, borrow_cmd) = SUT_CMDS.get().await;

        let res = borrow_cmd.execute(BorrowBookCommandRequest::new("no-such-id", "patron1")).await;
        assert!(res.is_err());
    }
}
