use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) book_repository: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, book_repository: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            book_repository,
        }
    }
}

// ApiResponse is the uniform envelope returned by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn message(message: &str) -> Self {
        Self {
            message: message.to_string(),
            data: None,
            count: None,
        }
    }

    pub fn with_data(message: &str, data: T) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
            count: None,
        }
    }

    pub fn with_count(message: &str, data: T, count: usize) -> Self {
        Self {
            message: message.to_string(),
            data: Some(data),
            count: Some(count),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ServerError {
    status: StatusCode,
    message: String,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::<()>::message(self.message.as_str()))).into_response()
    }
}

// Maps a command failure to the endpoint's fixed messages; internal detail
// is logged here and never crosses the boundary.
pub(crate) fn to_server_error(err: CommandError, not_found: &str, failure: &str) -> ServerError {
    match err {
        CommandError::NotFound { message } => {
            tracing::info!("{}", message);
            ServerError::new(StatusCode::NOT_FOUND, not_found)
        }
        other => {
            tracing::error!("{:?}", other);
            ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
        }
    }
}

// For endpoints with no not-found outcome every failure is the generic 500.
pub(crate) fn to_internal_server_error(err: CommandError, failure: &str) -> ServerError {
    tracing::error!("{:?}", err);
    ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
}
