//! Local book catalogue: an embedded SQLite store of rated book entries plus
//! a pure in-memory search/filter layer recomputed over full reads.
//!
//! # Examples
//!
//! Blocking store usage with [`store::sqlite::SqliteBookStore`]:
//! ```
//! use booklog::{book::BookDraft, query::filter::BookFilter, store::sqlite::SqliteBookStore};
//!
//! let store = SqliteBookStore::open_in_memory().expect("open");
//! store.insert(BookDraft {
//!     title: "Dragon's Keep".to_string(),
//!     rating: 5,
//!     tags: vec!["liked".to_string()],
//!     category: "Fantasy".to_string(),
//!     ..BookDraft::default()
//! }).expect("insert");
//!
//! let books = store.read_all().expect("read");
//! assert_eq!(books[0].genres, vec!["Fantasy".to_string()]);
//!
//! let filter = BookFilter { search: "dragon".to_string(), ..BookFilter::default() };
//! assert_eq!(filter.apply(&books).len(), 1);
//! ```
//!
//! Async usage through the single-writer handle:
//! ```no_run
//! use booklog::{
//!     book::BookDraft,
//!     runtime::handle::{StoreConfig, spawn_book_store},
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let handle = spawn_book_store(StoreConfig { path: Some("books.db".into()) });
//! if handle.initialize().await {
//!     let _id = handle.create(BookDraft::default()).await;
//!     let shelf = handle.read_all().await;
//!     assert!(!shelf.is_empty());
//! }
//! # }
//! ```
#![deny(missing_docs)]

/// Book domain records, drafts, and patches.
pub mod book;
/// Pure search, filtering, and grouping over full reads.
pub mod query;
/// Single-writer runtime handle.
pub mod runtime;
/// Schema, migrations, and CRUD over the embedded database.
pub mod store;
/// Shared primitive types and the tag vocabulary.
pub mod types;
