//! The book collection and its HTTP surface
//!
//! [`Bookshelf`] owns the records and enforces every rule about them.
//! The handlers translate between JSON and bookshelf calls and hold the
//! shared lock for the duration of each call.

pub mod error;
pub mod filter;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod shelf;

pub use error::{BookError, BookErrorKind, BookOperation, BookResult, ValidationFailure};
pub use filter::{FlagMatch, ListFilter, ListQuery, NameMatcher};
pub use model::{Book, BookDetail, BookFields, BookInput, BookList, BookSummary, CreatedBook};
pub use routes::router;
pub use shelf::Bookshelf;
