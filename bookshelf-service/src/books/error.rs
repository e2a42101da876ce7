//! Error types for bookshelf operations
//!
//! Every failure carries the operation it happened in, because the wire
//! message depends on it: a missing name reads differently on create than
//! on update, and a missing id reads differently on get, update and delete.
//!
//! ```rust
//! use bookshelf_service::books::{BookError, BookOperation};
//!
//! let error = BookError::not_found(BookOperation::Delete, "xyz");
//! assert!(error.is_not_found());
//! assert_eq!(error.status_code().as_u16(), 404);
//! assert_eq!(error.message(), "Buku gagal dihapus. Id tidak ditemukan");
//! ```

use std::fmt;

use axum::http::StatusCode;
use thiserror::Error;

use crate::ids::BookId;

/// Result type for bookshelf operations
pub type BookResult<T> = std::result::Result<T, BookError>;

/// Operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookOperation {
    /// Adding a book
    Create,
    /// Fetching one book by id
    Get,
    /// Replacing a book's fields
    Update,
    /// Removing a book
    Delete,
}

impl fmt::Display for BookOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Get => write!(f, "get"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Why a book payload was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// `name` was absent or empty
    #[error("name required")]
    NameRequired,

    /// `readPage` is larger than `pageCount`
    #[error("readPage ({read_page}) exceeds pageCount ({page_count})")]
    ReadPageExceedsPageCount {
        /// Submitted `readPage`
        read_page: u32,
        /// Submitted `pageCount`
        page_count: u32,
    },
}

impl ValidationFailure {
    fn wire_message(&self) -> &'static str {
        match self {
            Self::NameRequired => "Mohon isi nama buku",
            Self::ReadPageExceedsPageCount { .. } => {
                "readPage tidak boleh lebih besar dari pageCount"
            }
        }
    }
}

/// Category of bookshelf error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookErrorKind {
    /// The submitted fields break a validation rule
    #[error("validation failed: {0}")]
    Validation(ValidationFailure),

    /// No live book has the requested id
    #[error("not found")]
    NotFound,

    /// An invariant of the collection did not hold after a mutation
    #[error("internal error")]
    Internal,
}

impl BookErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured bookshelf error with operation context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("book {operation} failed: {kind}")]
pub struct BookError {
    /// The operation being performed when the error occurred
    pub operation: BookOperation,
    /// The category of error
    pub kind: BookErrorKind,
    /// The id involved, when there is one
    pub book_id: Option<BookId>,
}

impl BookError {
    /// Create a validation error
    pub fn validation(operation: BookOperation, reason: ValidationFailure) -> Self {
        Self {
            operation,
            kind: BookErrorKind::Validation(reason),
            book_id: None,
        }
    }

    /// Create a "not found" error for the given id
    pub fn not_found(operation: BookOperation, book_id: impl Into<BookId>) -> Self {
        Self {
            operation,
            kind: BookErrorKind::NotFound,
            book_id: Some(book_id.into()),
        }
    }

    /// The book just inserted could not be found again
    pub fn lost_on_insert(book_id: impl Into<BookId>) -> Self {
        Self {
            operation: BookOperation::Create,
            kind: BookErrorKind::Internal,
            book_id: Some(book_id.into()),
        }
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// Whether this is a validation failure
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, BookErrorKind::Validation(_))
    }

    /// Whether the requested id did not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, BookErrorKind::NotFound)
    }

    /// The message returned to clients in the `fail` envelope.
    #[must_use]
    pub fn message(&self) -> String {
        match (self.kind, self.operation) {
            (BookErrorKind::Validation(reason), BookOperation::Update) => {
                format!("Gagal memperbarui buku. {}", reason.wire_message())
            }
            (BookErrorKind::Validation(reason), _) => {
                format!("Gagal menambahkan buku. {}", reason.wire_message())
            }
            (BookErrorKind::NotFound, BookOperation::Update) => {
                "Gagal memperbarui buku. Id tidak ditemukan".to_string()
            }
            (BookErrorKind::NotFound, BookOperation::Delete) => {
                "Buku gagal dihapus. Id tidak ditemukan".to_string()
            }
            (BookErrorKind::NotFound, _) => "Buku tidak ditemukan".to_string(),
            (BookErrorKind::Internal, _) => "Buku gagal ditambahkan".to_string(),
        }
    }
}
