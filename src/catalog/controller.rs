use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use crate::books::dto::{BookDto, BookPatch};
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_books_cmd::{GetBooksCommand, GetBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::{to_internal_server_error, to_server_error, ApiResponse, AppState, ServerError};

async fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.book_repository.clone()).await
}

pub(crate) async fn get_all_books(
    State(state): State<AppState>) -> Result<(StatusCode, Json<ApiResponse<Vec<BookDto>>>), ServerError> {
    let svc = build_service(&state).await;
    let res = GetBooksCommand::new(svc).execute(GetBooksCommandRequest::new()).await
        .map_err(|err| to_internal_server_error(err, "Error retrieving books"))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("Books retrieved", res.books))))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<ApiResponse<BookDto>>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0)
        .map_err(|err| to_internal_server_error(CommandError::from(err), "Error adding book"))?;
    let svc = build_service(&state).await;
    let res = AddBookCommand::new(svc).execute(req).await
        .map_err(|err| to_internal_server_error(err, "Error adding book"))?;
    Ok((StatusCode::CREATED, Json(ApiResponse::with_data("Book added", res.book))))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<(StatusCode, Json<ApiResponse<BookDto>>), ServerError> {
    let patch: BookPatch = serde_json::from_value(json.0)
        .map_err(|err| to_internal_server_error(CommandError::from(err), "Error updating book"))?;
    let svc = build_service(&state).await;
    let res = UpdateBookCommand::new(svc).execute(UpdateBookCommandRequest::new(book_id.as_str(), patch)).await
        .map_err(|err| to_server_error(err, "Book not found", "Error updating book"))?;
    Ok((StatusCode::OK, Json(ApiResponse::with_data("Book updated", res.book))))
}

pub(crate) async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<(StatusCode, Json<ApiResponse<()>>), ServerError> {
    let svc = build_service(&state).await;
    let _ = RemoveBookCommand::new(svc).execute(RemoveBookCommandRequest::new(book_id)).await
        .map_err(|err| to_server_error(err, "Book not found", "Error deleting book"))?;
    Ok((StatusCode::OK, Json(ApiResponse::message("Book deleted"))))
}
