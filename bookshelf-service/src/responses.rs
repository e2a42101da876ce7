//! HTTP response builders with the service's JSON envelope
//!
//! Every response body has the same shape:
//!
//! ```json
//! { "status": "success", "message": "...", "data": { ... } }
//! ```
//!
//! `status` is `success` or `fail`. `message` and `data` are left out when
//! there is nothing to say.
//!
//! ## Status Codes Provided
//!
//! - **200 OK** - [`Success`]
//! - **201 Created** - [`Created`], with an optional `Location` header
//! - **4xx/5xx** - [`Fail`]

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome reported in the `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// The `{status, message, data}` body shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn new(status: ResponseStatus) -> Self {
        Self {
            status,
            message: None,
            data: None,
        }
    }
}

// ============================================================================
// 200 OK
// ============================================================================

/// HTTP 200 OK response
///
/// ```rust,ignore
/// async fn delete_book() -> Success {
///     Success::message("Buku berhasil dihapus")
/// }
///
/// async fn list_books() -> Success<BookList> {
///     Success::new(BookList { books })
/// }
/// ```
#[derive(Debug)]
pub struct Success<T = ()> {
    body: Envelope<T>,
}

impl<T> Success<T> {
    /// Create a new success response carrying `data`
    pub fn new(data: T) -> Self {
        let mut body = Envelope::new(ResponseStatus::Success);
        body.data = Some(data);
        Self { body }
    }
}

impl Success<()> {
    /// A success response with a message and no data
    pub fn message(message: impl Into<String>) -> Self {
        let mut body = Envelope::new(ResponseStatus::Success);
        body.message = Some(message.into());
        Self { body }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.body)).into_response()
    }
}

// ============================================================================
// 201 Created
// ============================================================================

/// HTTP 201 Created response
///
/// ```rust,ignore
/// async fn create_book() -> Created<CreatedBook> {
///     Created::new(CreatedBook { book_id: id.clone() })
///         .with_message("Buku berhasil ditambahkan")
///         .with_location(format!("/books/{id}"))
/// }
/// ```
#[derive(Debug)]
pub struct Created<T> {
    body: Envelope<T>,
    location: Option<String>,
}

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(data: T) -> Self {
        let mut body = Envelope::new(ResponseStatus::Success);
        body.data = Some(data);
        Self {
            body,
            location: None,
        }
    }

    /// Add a success message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = Some(message.into());
        self
    }

    /// Add a Location header pointing to the created resource
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(self.body)).into_response();

        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, header_value);
            }
        }

        response
    }
}

// ============================================================================
// Failures
// ============================================================================

/// A `fail` envelope with an error status code
#[derive(Debug)]
pub struct Fail {
    status_code: StatusCode,
    body: Envelope<()>,
}

impl Fail {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        let mut body = Envelope::new(ResponseStatus::Fail);
        body.message = Some(message.into());
        Self { status_code, body }
    }
}

impl IntoResponse for Fail {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
