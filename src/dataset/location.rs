use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for a shared copy of the
/// dataset.
const DATA_DIR_NAME: &str = ".bestseller-books";
/// File name looked up both in the working directory and in the data folder.
const DATASET_FILE_NAME: &str = "data.csv";

/// Decide which CSV file to load.
///
/// An explicit path always wins and is returned untouched, even if it does not
/// exist, so the loader gets to report the real I/O error. Otherwise a
/// `data.csv` next to the process is preferred, and the per-user copy under
/// `~/.bestseller-books/` is the fallback.
pub fn resolve_dataset_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    resolve_from(explicit, Path::new("."))
}

/// Same lookup as [`resolve_dataset_path`], with `working_dir` standing in for
/// the process's current directory.
fn resolve_from(explicit: Option<PathBuf>, working_dir: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let local = working_dir.join(DATASET_FILE_NAME);
    if local.is_file() {
        return Ok(local);
    }

    user_dataset_path()
}

/// Absolute path of the per-user dataset copy.
fn user_dataset_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs
        .home_dir()
        .join(DATA_DIR_NAME)
        .join(DATASET_FILE_NAME))
}
