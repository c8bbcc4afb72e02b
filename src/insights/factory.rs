use std::sync::Arc;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::insights::domain::InsightsService;
use crate::insights::domain::policy::AvailableSamplePolicy;
use crate::insights::domain::service::InsightsServiceImpl;

pub(crate) async fn create_insights_service(config: &Configuration,
                                            book_repository: Arc<dyn BookRepository>) -> Box<dyn InsightsService> {
    Box::new(InsightsServiceImpl::new(config, book_repository,
                                      Box::new(AvailableSamplePolicy::default())))
}
