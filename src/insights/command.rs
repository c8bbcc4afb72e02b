pub mod available_books_cmd;
pub mod book_stats_cmd;
pub mod recommend_books_cmd;
