use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBooksCommandRequest {}

impl GetBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl GetBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<GetBooksCommandRequest, GetBooksCommandResponse> for GetBooksCommand {
    async fn execute(&self, _req: GetBooksCommandRequest) -> Result<GetBooksCommandResponse, CommandError> {
        self.catalog_service.find_all_books()
            .await.map_err(CommandError::from).map(GetBooksCommandResponse::new)
    }
}
