//! Error types surfaced by the dataset layer. Query functions are infallible,
//! so everything here describes either a resource problem (the file itself) or
//! a single row that could not be coerced into a [`crate::Book`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to get at the dataset as a whole.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened (missing, permissions, ...).
    #[error("failed to open dataset {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file was opened but reading a line failed part way through.
    #[error("failed to read dataset {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single data line was rejected during field coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("column '{field}' is not a number: {value:?}")]
    InvalidNumber {
        /// Column that failed to parse.
        field: &'static str,
        /// The trimmed text that was rejected.
        value: String,
    },
}
