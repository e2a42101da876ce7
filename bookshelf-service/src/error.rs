//! Error types and HTTP response conversion

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::books::BookError;
use crate::responses::Fail;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bookshelf operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Request body or query string could not be read
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl Error {
    /// HTTP status this error is answered with
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Book(e) => e.status_code(),
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::Book(e) => {
                if e.is_validation() || e.is_not_found() {
                    tracing::debug!(
                        operation = %e.operation,
                        book_id = ?e.book_id,
                        "Request rejected: {}", e.kind
                    );
                } else {
                    tracing::error!(
                        operation = %e.operation,
                        book_id = ?e.book_id,
                        "Bookshelf invariant violated"
                    );
                }
                e.message()
            }

            Error::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                msg
            }

            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                "Internal server error".to_string()
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "Internal server error".to_string()
            }
        };

        Fail::new(status, message).into_response()
    }
}

// Manual From implementations for boxed errors
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::BadRequest(rejection.body_text())
    }
}
