use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{error, info, instrument, trace, warn};

use super::csv_line::parse_csv_line;
use crate::error::{DatasetError, RowError};
use crate::models::Book;

/// Load every valid book from the CSV file at `path`.
///
/// This is the forgiving entry point: if the file cannot be opened or read the
/// problem is logged at `error` level and an empty list comes back. Callers
/// that need to tell "unreadable" apart from "no rows" should use
/// [`try_load_books`] instead.
///
/// A read failure part way through the file also yields an empty list; rows
/// parsed before the failure are discarded rather than returned.
pub fn load_books(path: impl AsRef<Path>) -> Vec<Book> {
    match try_load_books(path) {
        Ok(books) => books,
        Err(err) => {
            error!(error = ?err, "could not load dataset");
            Vec::new()
        }
    }
}

/// Open the file at `path` and hand it to [`read_books`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn try_load_books(path: impl AsRef<Path>) -> Result<Vec<Book>, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    read_books(BufReader::new(file)).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read books from any buffered source. The first line is the header and is
/// discarded unseen. Each following line becomes at most one [`Book`]; lines
/// with too few fields are skipped quietly and lines with a bad number are
/// skipped with a warning. File order is preserved.
pub fn read_books<R: BufRead>(reader: R) -> io::Result<Vec<Book>> {
    let mut lines = LineReader::new(reader);
    let mut books = Vec::new();
    let mut buf = Vec::new();
    let mut skipped = 0usize;

    if !lines.next_line(&mut buf)? {
        return Ok(books);
    }

    while lines.next_line(&mut buf)? {
        let line = String::from_utf8_lossy(&buf);
        match parse_book_row(&line) {
            Ok(Some(book)) => books.push(book),
            Ok(None) => {
                trace!(line = %line, "skipping short line");
                skipped += 1;
            }
            Err(err) => {
                warn!(line = %line, error = %err, "skipping malformed line");
                skipped += 1;
            }
        }
    }

    info!(loaded = books.len(), skipped, "dataset loaded");
    Ok(books)
}

/// Turn one raw data line into a [`Book`].
///
/// Returns `Ok(None)` when the line has fewer than seven fields and an error
/// when one of the numeric columns does not parse. String columns are trimmed;
/// numeric columns are trimmed before parsing.
pub fn parse_book_row(line: &str) -> Result<Option<Book>, RowError> {
    let fields = parse_csv_line(line);
    // Anything past the seventh field is ignored, which is how stray unquoted
    // commas in a trailing column get absorbed.
    let [title, author, rating, reviews, price, year, genre, ..] = fields.as_slice() else {
        return Ok(None);
    };

    Ok(Some(Book {
        title: title.trim().to_string(),
        author: author.trim().to_string(),
        user_rating: parse_rating(rating)?,
        reviews: parse_number(reviews, "reviews")?,
        price: parse_number(price, "price")?,
        year: parse_number(year, "year")?,
        genre: genre.trim().to_string(),
    }))
}

fn parse_number<T: FromStr>(raw: &str, field: &'static str) -> Result<T, RowError> {
    let value = raw.trim();
    value.parse().map_err(|_| invalid_number(field, value))
}

/// Parse the rating column. Accepts plain decimals and exponents, an optional
/// `d`/`f` type suffix, and the exact words `NaN` and `Infinity` (optionally
/// signed). Shorthands such as `inf` or `nan` are rejected.
fn parse_rating(raw: &str) -> Result<f64, RowError> {
    const FIELD: &str = "user_rating";
    let value = raw.trim();
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    if matches!(unsigned, "NaN" | "Infinity") {
        return value.parse().map_err(|_| invalid_number(FIELD, value));
    }

    let digits = value.strip_suffix(['d', 'D', 'f', 'F']).unwrap_or(value);
    if digits
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return Err(invalid_number(FIELD, value));
    }
    digits.parse().map_err(|_| invalid_number(FIELD, value))
}

fn invalid_number(field: &'static str, value: &str) -> RowError {
    RowError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

/// Splits a byte stream into lines ending at `\n`, `\r`, or `\r\n`. The
/// terminator is not part of the line, and a final unterminated line is still
/// returned.
struct LineReader<R> {
    reader: R,
    /// The previous line ended at `\r`, so a `\n` right after it belongs to
    /// the same terminator.
    skip_lf: bool,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            skip_lf: false,
        }
    }

    /// Fill `buf` with the next line. Returns `false` once the source is
    /// exhausted.
    fn next_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        buf.clear();
        let mut read_any = false;
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(read_any);
            }

            let mut start = 0;
            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    start = 1;
                }
            }

            let rest = &available[start..];
            match rest.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    buf.extend_from_slice(&rest[..pos]);
                    self.skip_lf = rest[pos] == b'\r';
                    self.reader.consume(start + pos + 1);
                    return Ok(true);
                }
                None => {
                    buf.extend_from_slice(rest);
                    read_any |= !rest.is_empty();
                    let used = available.len();
                    self.reader.consume(used);
                }
            }
        }
    }
}
