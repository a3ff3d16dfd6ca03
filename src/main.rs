//! Binary entry point: find the dataset, load it once, and print the summary
//! statistics. Interactive browsing is left to other front-ends built on the
//! library.
use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use bestseller_books::{dataset_statistics, load_books, logging, resolve_dataset_path};

/// Load the dataset named on the command line (or the default location) and
/// print an overview.
///
/// An empty dataset is treated as fatal: either the file was unreadable, which
/// the loader has already logged, or it held no usable rows.
fn main() -> anyhow::Result<()> {
    logging::init()?;

    let explicit = env::args_os().nth(1).map(PathBuf::from);
    let path = resolve_dataset_path(explicit).context("failed to locate dataset")?;

    let books = load_books(&path);
    if books.is_empty() {
        bail!("no books loaded from {}", path.display());
    }

    println!("Dataset loaded from {}", path.display());
    print!("{}", dataset_statistics(&books));
    Ok(())
}
