//! Conjunctive facet filtering combined with free-text search.

use crate::{
    book::BookRecord,
    query::fuzzy,
    types::{Rating, SpiceLevel},
};

/// A search-screen query: a free-text term plus exact-match facets.
///
/// All active criteria must hold for a record to pass, and the criteria are
/// independent, so the result set does not depend on application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Free-text term matched across the searchable fields. Empty or
    /// whitespace-only disables text search.
    pub search: String,
    /// Tags a record must all carry.
    pub tags: Vec<String>,
    /// Exact rating to require, when set.
    pub rating: Option<Rating>,
    /// Exact spice level to require, when set.
    pub spicy_level: Option<SpiceLevel>,
}

impl BookFilter {
    /// Returns true when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.tags.is_empty()
            && self.rating.is_none()
            && self.spicy_level.is_none()
    }

    /// Tests a single record against every active criterion.
    pub fn matches(&self, book: &BookRecord) -> bool {
        let term = self.search.trim();
        if !term.is_empty() && !fuzzy::record_matches(term, book) {
            return false;
        }
        if !self
            .tags
            .iter()
            .all(|tag| book.tags.iter().any(|have| have == tag))
        {
            return false;
        }
        if self.rating.is_some_and(|want| book.rating != want) {
            return false;
        }
        if self
            .spicy_level
            .is_some_and(|want| book.spicy_level != want)
        {
            return false;
        }
        true
    }

    /// Filters the full record set, preserving input order.
    pub fn apply(&self, books: &[BookRecord]) -> Vec<BookRecord> {
        books.iter().filter(|b| self.matches(b)).cloned().collect()
    }
}
