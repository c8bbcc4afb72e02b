use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::insights::domain::InsightsService;

pub(crate) struct AvailableBooksCommand {
    insights_service: Box<dyn InsightsService>,
}

impl AvailableBooksCommand {
    pub(crate) fn new(insights_service: Box<dyn InsightsService>) -> Self {
        Self {
            insights_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailableBooksCommandRequest {}

impl AvailableBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AvailableBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl AvailableBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<AvailableBooksCommandRequest, AvailableBooksCommandResponse> for AvailableBooksCommand {
    async fn execute(&self, _req: AvailableBooksCommandRequest) -> Result<AvailableBooksCommandResponse, CommandError> {
        self.insights_service.find_available_books()
            .await.map_err(CommandError::from).map(AvailableBooksCommandResponse::new)
    }
}
