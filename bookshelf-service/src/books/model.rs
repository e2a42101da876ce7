//! Book records and the payloads that create or replace them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ValidationFailure;
use crate::ids::BookId;

/// A book record owned by the [`Bookshelf`](super::Bookshelf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Always `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    #[serde(serialize_with = "iso_millis::serialize")]
    pub inserted_at: DateTime<Utc>,
    #[serde(serialize_with = "iso_millis::serialize")]
    pub updated_at: DateTime<Utc>,
}

/// Timestamps on the wire: RFC 3339 in UTC with millisecond precision,
/// e.g. `2026-10-19T16:49:00.123Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Book {
    /// Build a new record; both timestamps are set to `now`.
    pub(crate) fn new(id: BookId, fields: BookFields, now: DateTime<Utc>) -> Self {
        let finished = fields.finished();
        Self {
            id,
            name: fields.name,
            year: fields.year,
            author: fields.author,
            summary: fields.summary,
            publisher: fields.publisher,
            page_count: fields.page_count,
            read_page: fields.read_page,
            finished,
            reading: fields.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field, keeping `id` and `inserted_at`.
    pub(crate) fn apply(&mut self, fields: BookFields, now: DateTime<Utc>) {
        self.finished = fields.finished();
        self.name = fields.name;
        self.year = fields.year;
        self.author = fields.author;
        self.summary = fields.summary;
        self.publisher = fields.publisher;
        self.page_count = fields.page_count;
        self.read_page = fields.read_page;
        self.reading = fields.reading;
        self.updated_at = now;
    }
}

/// Request body for creating or updating a book.
///
/// Mirrors the JSON clients send. Nothing here is trusted yet; convert it
/// into [`BookFields`] to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

#[cfg(test)]
impl BookInput {
    /// Start an input with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the page counters
    #[must_use]
    pub fn with_pages(mut self, page_count: u32, read_page: u32) -> Self {
        self.page_count = page_count;
        self.read_page = read_page;
        self
    }

    /// Set the publisher
    #[must_use]
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Set the reading flag
    #[must_use]
    pub fn with_reading(mut self, reading: bool) -> Self {
        self.reading = reading;
        self
    }
}

/// Validated book fields, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    name: String,
    year: Option<i32>,
    author: Option<String>,
    summary: Option<String>,
    publisher: Option<String>,
    page_count: u32,
    read_page: u32,
    reading: bool,
}

impl BookFields {
    pub fn finished(&self) -> bool {
        self.read_page == self.page_count
    }
}

impl TryFrom<BookInput> for BookFields {
    type Error = ValidationFailure;

    /// Checks run in order: name first, then the page relationship.
    fn try_from(input: BookInput) -> Result<Self, Self::Error> {
        let name = match input.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ValidationFailure::NameRequired),
        };

        if input.read_page > input.page_count {
            return Err(ValidationFailure::ReadPageExceedsPageCount {
                read_page: input.read_page,
                page_count: input.page_count,
            });
        }

        Ok(Self {
            name,
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count: input.page_count,
            read_page: input.read_page,
            reading: input.reading,
        })
    }
}

/// The `{id, name, publisher}` view returned by list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// `data` of a successful create
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: BookId,
}

/// `data` of a list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of a get response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub book: Book,
}
