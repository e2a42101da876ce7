//! Route table for the `/books` resource

use axum::{routing::get, Router};

use super::handlers::{create_book, delete_book, get_book, list_books, update_book};
use crate::state::AppState;

/// Routes for the book collection, awaiting an [`AppState`]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{book_id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
