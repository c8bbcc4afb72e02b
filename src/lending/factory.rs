use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;

pub(crate) async fn create_lending_service(config: &Configuration,
                                           book_repository: Arc<dyn BookRepository>) -> Box<dyn LendingService> {
    Box::new(LendingServiceImpl::new(config, book_repository))
}
