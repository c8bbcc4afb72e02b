use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{to_internal_server_error, to_server_error, ApiResponse, AppState, ServerError};
use crate::lending::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::lending::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::lending::domain::LendingService;
use crate::lending::factory;

async fn build_service(state: &AppState) -> Box<dyn LendingService> {
    factory::create_lending_service(&state.config, state.book_repository.clone()).await
}

pub(crate) async fn borrow_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<(StatusCode, Json<ApiResponse<BookDto>>), ServerError> {
    let mut req: BorrowBookCommandRequest = serde_json::from_value(json.0)
        .map_err(|err| to_internal_server_error(CommandError::from(err), "Error borrowing book"))?;
    req.book_id = book_id;
    let svc = build_service(&state).await;
    let res = BorrowBookCommand::new(svc).execute(req).await
        .map_err(|err| to_server_error(err, "Book not found or already borrowed", "Error borrowing book"))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("Book borrowed", res.book))))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<(StatusCode, Json<ApiResponse<()>>), ServerError> {
    let svc = build_service(&state).await;
    let _ = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(book_id)).await
        .map_err(|err| to_server_error(err, "Book not found or not currently borrowed", "Error returning book"))?;
    Ok((StatusCode::OK, Json(ApiResponse::message("Book returned"))))
}
