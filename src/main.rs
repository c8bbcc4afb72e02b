mod books;
mod catalog;
mod core;
mod insights;
mod lending;
mod utils;

use std::net::SocketAddr;
use axum::{
    routing::{get, post, put},
    Router,
};
use crate::books::factory::create_book_repository;
use crate::catalog::controller::{add_book, delete_book, get_all_books, update_book};
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::insights::controller::{get_available_books, get_book_stats, get_recommendations};
use crate::lending::controller::{borrow_book, return_book};
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Configuration::from_env();
    let book_repository = create_book_repository(RepositoryStore::Memory).await;
    let state = AppState::new(config.clone(), book_repository);

    // static segments take precedence over :id
    let app = Router::new()
        .route("/books", get(get_all_books).post(add_book))
        .route("/books/available", get(get_available_books))
        .route("/books/recommendations", get(get_recommendations))
        .route("/books/stats", get(get_book_stats))
        .route("/books/:id", put(update_book).delete(delete_book))
        .route("/books/:id/borrow", post(borrow_book))
        .route("/books/:id/return", post(return_book))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("book lending service listening on {}", addr);
    if let Err(err) = axum::Server::bind(&addr).serve(app.into_make_service()).await {
        tracing::error!("server terminated {:?}", err);
    }
}
