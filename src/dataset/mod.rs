//! Dataset ingestion split across logical submodules: line splitting, row
//! coercion and loading, and locating the file to read.

mod csv_line;
mod loader;
mod location;

pub use csv_line::parse_csv_line;
pub use loader::{load_books, parse_book_row, read_books, try_load_books};
pub use location::resolve_dataset_path;
