//! The in-memory book collection

use chrono::{DateTime, Utc};

use super::error::{BookError, BookOperation, BookResult};
use super::filter::ListFilter;
use super::model::{Book, BookFields, BookInput, BookSummary};
use crate::ids::BookId;

/// Ordered collection of books.
///
/// Insertion order is the only ordering. Ids are unique among live records.
/// The collection has no internal locking; a host that serves requests
/// concurrently must hold one lock around each whole operation (see
/// [`AppState`](crate::state::AppState)).
///
/// ```rust
/// use bookshelf_service::books::{BookInput, Bookshelf, ListFilter};
///
/// let mut shelf = Bookshelf::new();
/// let input = BookInput {
///     name: Some("Dune".to_string()),
///     page_count: 412,
///     read_page: 412,
///     ..BookInput::default()
/// };
/// let id = shelf.create(input).unwrap();
///
/// assert!(shelf.get(&id).unwrap().finished);
/// assert_eq!(shelf.list(&ListFilter::All).len(), 1);
///
/// shelf.delete(&id).unwrap();
/// assert!(shelf.get(&id).is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Bookshelf {
    books: Vec<Book>,
}

impl Bookshelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate `input`, store it as a new book and return its id.
    pub fn create(&mut self, input: BookInput) -> BookResult<BookId> {
        self.create_at(input, Utc::now())
    }

    /// [`create`](Self::create) with an explicit clock reading.
    pub fn create_at(&mut self, input: BookInput, now: DateTime<Utc>) -> BookResult<BookId> {
        let fields = BookFields::try_from(input)
            .map_err(|reason| BookError::validation(BookOperation::Create, reason))?;

        let id = self.unused_id();
        self.books.push(Book::new(id.clone(), fields, now));

        if self.position(&id).is_none() {
            tracing::error!(book_id = %id, "Book not retrievable right after insert");
            return Err(BookError::lost_on_insert(id));
        }

        Ok(id)
    }

    /// Books passing `filter`, projected, in insertion order.
    pub fn list(&self, filter: &ListFilter) -> Vec<BookSummary> {
        self.books
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect()
    }

    pub fn get(&self, id: &BookId) -> BookResult<&Book> {
        self.books
            .iter()
            .find(|book| &book.id == id)
            .ok_or_else(|| BookError::not_found(BookOperation::Get, id.clone()))
    }

    /// Replace the mutable fields of the book with `id`.
    ///
    /// The payload is validated before the lookup, so an invalid payload
    /// against an unknown id reports the validation failure.
    pub fn update(&mut self, id: &BookId, input: BookInput) -> BookResult<()> {
        self.update_at(id, input, Utc::now())
    }

    /// [`update`](Self::update) with an explicit clock reading.
    pub fn update_at(
        &mut self,
        id: &BookId,
        input: BookInput,
        now: DateTime<Utc>,
    ) -> BookResult<()> {
        let fields = BookFields::try_from(input)
            .map_err(|reason| BookError::validation(BookOperation::Update, reason))?;

        let index = self
            .position(id)
            .ok_or_else(|| BookError::not_found(BookOperation::Update, id.clone()))?;
        self.books[index].apply(fields, now);

        Ok(())
    }

    /// Remove the book with `id` and hand it back.
    pub fn delete(&mut self, id: &BookId) -> BookResult<Book> {
        let index = self
            .position(id)
            .ok_or_else(|| BookError::not_found(BookOperation::Delete, id.clone()))?;
        Ok(self.books.remove(index))
    }

    fn position(&self, id: &BookId) -> Option<usize> {
        self.books.iter().position(|book| &book.id == id)
    }

    fn unused_id(&self) -> BookId {
        loop {
            let id = BookId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}
