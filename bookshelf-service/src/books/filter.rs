//! Query filters for listing books
//!
//! A list request carries up to three optional filters: `name`, `reading`
//! and `finished`. They never combine. The first one present wins, in that
//! order, and an empty value counts as absent.
//!
//! ```rust
//! use bookshelf_service::books::{ListFilter, ListQuery};
//!
//! let query = ListQuery {
//!     name: Some("dicoding".to_string()),
//!     reading: Some("1".to_string()),
//!     finished: None,
//! };
//! assert!(matches!(ListFilter::from(&query), ListFilter::Name(_)));
//! ```

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::model::Book;

/// Raw `?name=&reading=&finished=` query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(default)]
    pub finished: Option<String>,
}

/// The single filter a list request resolves to
#[derive(Debug, Clone, Default)]
pub enum ListFilter {
    /// No filter; every book matches
    #[default]
    All,
    /// Case-insensitive match against `name`
    Name(NameMatcher),
    /// Match on the `reading` flag
    Reading(FlagMatch),
    /// Match on the derived `finished` flag
    Finished(FlagMatch),
}

impl ListFilter {
    /// Whether `book` passes this filter
    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Name(matcher) => matcher.is_match(&book.name),
            Self::Reading(flag) => flag.matches(book.reading),
            Self::Finished(flag) => flag.matches(book.finished),
        }
    }
}

impl From<&ListQuery> for ListFilter {
    fn from(query: &ListQuery) -> Self {
        if let Some(name) = present(&query.name) {
            Self::Name(NameMatcher::new(name))
        } else if let Some(reading) = present(&query.reading) {
            Self::Reading(FlagMatch::parse(reading))
        } else if let Some(finished) = present(&query.finished) {
            Self::Finished(FlagMatch::parse(finished))
        } else {
            Self::All
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Matches book names against the `name` query.
///
/// The query is compiled as a case-insensitive regular expression so that
/// patterns such as `^harry` keep working. Text that is not a valid
/// expression (`c++`, `[draft`) is matched as a plain substring instead.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    Pattern(Regex),
    Literal(String),
}

impl NameMatcher {
    pub fn new(query: &str) -> Self {
        match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(regex) => Self::Pattern(regex),
            Err(e) => {
                tracing::debug!(query, error = %e, "Name filter is not a valid pattern, matching literally");
                Self::Literal(query.to_lowercase())
            }
        }
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(name),
            Self::Literal(needle) => name.to_lowercase().contains(needle.as_str()),
        }
    }
}

/// Comparison of a boolean field against a numeric query value.
///
/// `1` selects `true`, `0` selects `false`. Any other value, numeric or not,
/// selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMatch {
    Is(bool),
    Nothing,
}

impl FlagMatch {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(n) if n == 1.0 => Self::Is(true),
            Ok(n) if n == 0.0 => Self::Is(false),
            _ => Self::Nothing,
        }
    }

    pub fn matches(&self, flag: bool) -> bool {
        matches!(self, Self::Is(expected) if *expected == flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(name: Option<&str>, reading: Option<&str>, finished: Option<&str>) -> ListQuery {
        ListQuery {
            name: name.map(str::to_string),
            reading: reading.map(str::to_string),
            finished: finished.map(str::to_string),
        }
    }

    #[test]
    fn test_no_filters_resolves_to_all() {
        assert!(matches!(ListFilter::from(&ListQuery::default()), ListFilter::All));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let filter = ListFilter::from(&query(Some(""), Some(""), Some("")));
        assert!(matches!(filter, ListFilter::All));

        let filter = ListFilter::from(&query(Some(""), None, Some("1")));
        assert!(matches!(filter, ListFilter::Finished(FlagMatch::Is(true))));
    }

    #[test]
    fn test_precedence_name_then_reading_then_finished() {
        let filter = ListFilter::from(&query(Some("a"), Some("1"), Some("0")));
        assert!(matches!(filter, ListFilter::Name(_)));

        let filter = ListFilter::from(&query(None, Some("1"), Some("0")));
        assert!(matches!(filter, ListFilter::Reading(FlagMatch::Is(true))));

        let filter = ListFilter::from(&query(None, None, Some("0")));
        assert!(matches!(filter, ListFilter::Finished(FlagMatch::Is(false))));
    }

    #[test]
    fn test_name_matcher_is_case_insensitive() {
        let matcher = NameMatcher::new("har");
        assert!(matcher.is_match("Harry Potter"));
        assert!(matcher.is_match("The CHARM"));
        assert!(!matcher.is_match("Dune"));
    }

    #[test]
    fn test_name_matcher_supports_patterns() {
        let matcher = NameMatcher::new("^dic");
        assert!(matcher.is_match("Dicoding Academy"));
        assert!(!matcher.is_match("Belajar Dicoding"));
    }

    #[test]
    fn test_name_matcher_falls_back_to_literal() {
        let matcher = NameMatcher::new("C++ (");
        assert!(matches!(matcher, NameMatcher::Literal(_)));
        assert!(matcher.is_match("Learning c++ (3rd ed)"));
        assert!(!matcher.is_match("Learning C"));
    }

    #[test]
    fn test_flag_parse() {
        assert_eq!(FlagMatch::parse("1"), FlagMatch::Is(true));
        assert_eq!(FlagMatch::parse(" 0 "), FlagMatch::Is(false));
        assert_eq!(FlagMatch::parse("1.0"), FlagMatch::Is(true));
        assert_eq!(FlagMatch::parse("2"), FlagMatch::Nothing);
        assert_eq!(FlagMatch::parse("true"), FlagMatch::Nothing);
        assert_eq!(FlagMatch::parse("abc"), FlagMatch::Nothing);
    }

    #[test]
    fn test_flag_matches() {
        assert!(FlagMatch::Is(true).matches(true));
        assert!(!FlagMatch::Is(true).matches(false));
        assert!(FlagMatch::Is(false).matches(false));
        assert!(!FlagMatch::Nothing.matches(true));
        assert!(!FlagMatch::Nothing.matches(false));
    }
}
