//! Domain model for one row of the bestselling books dataset. The loader is the
//! only producer of these values; every query borrows them through a `&[Book]`
//! slice owned by the caller, so nothing downstream ever mutates a record once
//! it has been built.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// A validated dataset row. A `Book` only exists when all seven columns were
/// present and the four numeric columns parsed, so consumers never have to deal
/// with half-populated records.
pub struct Book {
    /// Title with surrounding whitespace removed. May be empty.
    pub title: String,
    /// Author as written in the dataset (trimmed). Queries match it
    /// case-insensitively but listings keep the stored spelling.
    pub author: String,
    /// Average user rating, nominally between 0.0 and 5.0. The range is not
    /// enforced because the dataset is taken at face value.
    pub user_rating: f64,
    /// Number of user reviews.
    pub reviews: i32,
    /// Price in whole currency units.
    pub price: i32,
    /// Publication year as listed.
    pub year: i32,
    /// Free-form category label such as `Fiction` or `Non Fiction`.
    pub genre: String,
}

impl fmt::Display for Book {
    /// Write `Title by Author (Year)`, the one-line form used in listings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.year)
    }
}
