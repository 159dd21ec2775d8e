//! Pure, in-memory search and grouping over the full record set.
//!
//! Nothing in this module does I/O or holds state: every function and method
//! maps the latest `read_all` result plus a query to a derived view, and is
//! recomputed whenever either input changes.

/// Free-text search combined with conjunctive facet filters.
pub mod filter;
/// Typo-tolerant token matching for the free-text term.
pub mod fuzzy;
/// Genre buckets and home-screen stats.
pub mod shelf;
