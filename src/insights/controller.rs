use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use crate::books::dto::BookDto;
use crate::core::command::Command;
use crate::core::controller::{to_internal_server_error, ApiResponse, AppState, ServerError};
use crate::insights::command::available_books_cmd::{AvailableBooksCommand, AvailableBooksCommandRequest};
use crate::insights::command::book_stats_cmd::{BookStatsCommand, BookStatsCommandRequest};
use crate::insights::command::recommend_books_cmd::{RecommendBooksCommand, RecommendBooksCommandRequest};
use crate::insights::domain::InsightsService;
use crate::insights::dto::BookStatsDto;
use crate::insights::factory;

async fn build_service(state: &AppState) -> Box<dyn InsightsService> {
    factory::create_insights_service(&state.config, state.book_repository.clone()).await
}

pub(crate) async fn get_recommendations(
    State(state): State<AppState>) -> Result<(StatusCode, Json<ApiResponse<Vec<BookDto>>>), ServerError> {
    let svc = build_service(&state).await;
    let res = RecommendBooksCommand::new(svc).execute(RecommendBooksCommandRequest::new()).await
        .map_err(|err| to_internal_server_error(err, "Error fetching recommendations"))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("Recommendations retrieved", res.books))))
}

pub(crate) async fn get_available_books(
    State(state): State<AppState>) -> Result<(StatusCode, Json<ApiResponse<Vec<BookDto>>>), ServerError> {
    let svc = build_service(&state).await;
    let res = AvailableBooksCommand::new(svc).execute(AvailableBooksCommandRequest::new()).await
        .map_err(|err| to_internal_server_error(err, "Error retrieving available books"))?;
    let message = if res.books.is_empty() {
        "No available books"
    } else {
        "Available books retrieved"
    };
    let count = res.books.len();
    Ok((StatusCode::OK, Json(ApiResponse::with_count(message, res.books, count))))
}

pub(crate) async fn get_book_stats(
    State(state): State<AppState>) -> Result<(StatusCode, Json<ApiResponse<BookStatsDto>>), ServerError> {
    let svc = build_service(&state).await;
    let res = BookStatsCommand::new(svc).execute(BookStatsCommandRequest::new()).await
        .map_err(|err| to_internal_server_error(err, "Error retrieving library statistics"))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("Library statistics retrieved successfully", res.stats))))
}
