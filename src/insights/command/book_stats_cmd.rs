use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::insights::domain::InsightsService;
use crate::insights::dto::BookStatsDto;

pub(crate) struct BookStatsCommand {
    insights_service: Box<dyn InsightsService>,
}

impl BookStatsCommand {
    pub(crate) fn new(insights_service: Box<dyn InsightsService>) -> Self {
        Self {
            insights_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookStatsCommandRequest {}

impl BookStatsCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct BookStatsCommandResponse {
    pub stats: BookStatsDto,
}

impl BookStatsCommandResponse {
    pub fn new(stats: BookStatsDto) -> Self {
        Self {
            stats,
        }
    }
}

#[async_trait]
impl Command<BookStatsCommandRequest, BookStatsCommandResponse> for BookStatsCommand {
    async fn execute(&self, _req: BookStatsCommandRequest) -> Result<BookStatsCommandResponse, CommandError> {
        self.insights_service.book_stats()
            .await.map_err(CommandError::from).map(BookStatsCommandResponse::new)
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
    use crate::insights::command::book_stats_cmd::{BookStatsCommand, BookStatsCommandRequest};
    use crate::insights::factory;

    lazy_static! {
        static ref SUT_CMDS : AsyncOnce<(AddBookCommand, BookStatsCommand)> = AsyncOnce::new(async {
                let repo = create_book_repository(RepositoryStore::Memory).await;
                let add_svc = crate::catalog::factory::create_catalog_service(&Configuration::new(), repo.clone()).await;
                let insights_svc = factory::create_insights_service(&Configuration::new(), repo).await;
                (AddBookCommand::new(add_svc), BookStatsCommand::new(insights_svc))
            });
    }

    #[tokio::test]
    async fn test_should_run_book_stats() {
        let (add_cmd, stats_cmd) = SUT_CMDS.get().await;

        let _ = add_cmd.execute(AddBookCommandRequest::new("test book", "author", Some("SciFi")))
            .await.expect("should add book");
        let res = stats_cmd.execute(BookStatsCommandRequest::new()).await.expect("should compute stats");
        assert!(res.stats.total_books >= 1);
        assert_eq!(res.stats.total_books, res.stats.available_books + res.stats.borrowed_books);
        assert!(res.stats.genre_breakdown.get("SciFi").is_some());
    }
}
