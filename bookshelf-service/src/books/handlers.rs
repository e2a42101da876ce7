//! HTTP handlers for the `/books` resource

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use super::filter::{ListFilter, ListQuery};
use super::model::{BookDetail, BookInput, BookList, CreatedBook};
use crate::error::Result;
use crate::ids::BookId;
use crate::responses::{Created, Success};
use crate::state::AppState;

/// `POST /books`
pub async fn create_book(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookInput>, JsonRejection>,
) -> Result<Created<CreatedBook>> {
    let Json(input) = payload?;

    let book_id = state.books().lock().await.create(input)?;
    tracing::info!(book_id = %book_id, "Book created");

    let location = format!("/books/{book_id}");
    Ok(Created::new(CreatedBook { book_id })
        .with_message("Buku berhasil ditambahkan")
        .with_location(location))
}

/// `GET /books?name=&reading=&finished=`
pub async fn list_books(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Success<BookList>> {
    let Query(query) = query?;
    let filter = ListFilter::from(&query);

    let books = state.books().lock().await.list(&filter);
    tracing::debug!(?filter, count = books.len(), "Listed books");

    Ok(Success::new(BookList { books }))
}

/// `GET /books/{book_id}`
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<Success<BookDetail>> {
    let book = state.books().lock().await.get(&book_id)?.clone();
    Ok(Success::new(BookDetail { book }))
}

/// `PUT /books/{book_id}`
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
    payload: std::result::Result<Json<BookInput>, JsonRejection>,
) -> Result<Success> {
    let Json(input) = payload?;

    state.books().lock().await.update(&book_id, input)?;
    tracing::info!(book_id = %book_id, "Book updated");

    Ok(Success::message("Buku berhasil diperbarui"))
}

/// `DELETE /books/{book_id}`
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<BookId>,
) -> Result<Success> {
    state.books().lock().await.delete(&book_id)?;
    tracing::info!(book_id = %book_id, "Book deleted");

    Ok(Success::message("Buku berhasil dihapus"))
}
