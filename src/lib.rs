//! Core library for exploring the Amazon bestselling books dataset.
//!
//! The crate is deliberately small: a CSV loader that turns text rows into
//! [`Book`] values, and a set of read-only queries over the resulting slice.
//! The caller owns the loaded `Vec<Book>` and passes it to each query, so the
//! library never holds state of its own.
pub mod dataset;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;

/// Loading entry points. `main.rs` uses `resolve_dataset_path` and
/// `load_books`; the rest are exposed for tooling and tests.
pub use dataset::{
    load_books, parse_book_row, parse_csv_line, read_books, resolve_dataset_path, try_load_books,
};

pub use error::{DatasetError, RowError};

/// The single domain type every other layer works with.
pub use models::Book;

/// Query surface over a loaded dataset.
pub use query::{
    books_by_author, books_with_rating, count_by_author, dataset_statistics, list_authors,
    price_summary, DatasetStatistics, GenreShare, PriceSummary, PricedTitle, Range, Summary,
};
