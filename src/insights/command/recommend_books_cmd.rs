use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::insights::domain::InsightsService;

pub(crate) struct RecommendBooksCommand {
    insights_service: Box<dyn InsightsService>,
}

impl RecommendBooksCommand {
    pub(crate) fn new(insights_service: Box<dyn InsightsService>) -> Self {
        Self {
            insights_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendBooksCommandRequest {}

impl RecommendBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct RecommendBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl RecommendBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<RecommendBooksCommandRequest, RecommendBooksCommandResponse> for RecommendBooksCommand {
    async fn execute(&self, _req: RecommendBooksCommandRequest) -> Result<RecommendBooksCommandResponse, CommandError> {
        self.insights_service.recommend_books()
            .await.map_err(CommandError::from).map(RecommendBooksCommandResponse::new)
    }
}
