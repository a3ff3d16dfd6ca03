use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::models::Book;

/// Smallest and largest value seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

/// Range plus mean for a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary<T> {
    pub min: T,
    pub max: T,
    pub average: f64,
}

/// How much of the dataset falls under one genre.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreShare {
    pub genre: String,
    pub count: usize,
    /// `count * 100 / total_books`.
    pub percentage: f64,
}

/// Aggregate view over the whole dataset. The optional members are `None`
/// only when the dataset is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub total_books: usize,
    /// Distinct authors, compared case-sensitively like [`super::list_authors`].
    pub unique_authors: usize,
    pub years: Option<Range<i32>>,
    pub ratings: Option<Summary<f64>>,
    pub prices: Option<Summary<i32>>,
    /// One entry per genre, ordered by genre name.
    pub genres: Vec<GenreShare>,
}

/// Compute [`DatasetStatistics`] in one pass over `books`.
pub fn dataset_statistics(books: &[Book]) -> DatasetStatistics {
    let mut authors = HashSet::new();
    let mut genres: BTreeMap<&str, usize> = BTreeMap::new();
    let mut years: Option<Range<i32>> = None;
    let mut prices: Option<Range<i32>> = None;
    let mut ratings: Option<Range<f64>> = None;
    let mut price_total = 0i64;
    let mut rating_total = CompensatedSum::default();

    for book in books {
        authors.insert(book.author.as_str());
        *genres.entry(book.genre.as_str()).or_default() += 1;

        years = Some(widen(years, book.year, i32::min, i32::max));
        prices = Some(widen(prices, book.price, i32::min, i32::max));
        ratings = Some(widen(ratings, book.user_rating, nan_min, nan_max));
        price_total += i64::from(book.price);
        rating_total.add(book.user_rating);
    }

    let count = books.len() as f64;
    DatasetStatistics {
        total_books: books.len(),
        unique_authors: authors.len(),
        years,
        ratings: ratings.map(|Range { min, max }| Summary {
            min,
            max,
            average: rating_total.value() / count,
        }),
        prices: prices.map(|Range { min, max }| Summary {
            min,
            max,
            average: price_total as f64 / count,
        }),
        genres: genres
            .into_iter()
            .map(|(genre, genre_count)| GenreShare {
                genre: genre.to_string(),
                count: genre_count,
                percentage: genre_count as f64 * 100.0 / count,
            })
            .collect(),
    }
}

fn widen<T: Copy>(range: Option<Range<T>>, value: T, min: fn(T, T) -> T, max: fn(T, T) -> T) -> Range<T> {
    match range {
        Some(Range { min: lo, max: hi }) => Range {
            min: min(lo, value),
            max: max(hi, value),
        },
        None => Range { min: value, max: value },
    }
}

/// Like `f64::min`, except a NaN on either side wins, so a NaN rating shows up
/// in the range instead of being skipped.
fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Kahan summation for the rating column. Ratings such as 4.7 are not exact in
/// binary, and a naive running sum drifts in the last digits over a few hundred
/// rows.
#[derive(Debug, Default)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
    simple: f64,
}

impl CompensatedSum {
    fn add(&mut self, value: f64) {
        self.simple += value;
        let adjusted = value - self.compensation;
        let next = self.sum + adjusted;
        self.compensation = (next - self.sum) - adjusted;
        self.sum = next;
    }

    fn value(&self) -> f64 {
        let total = self.sum - self.compensation;
        // Compensation turns an overflow to infinity into NaN.
        if total.is_nan() && self.simple.is_infinite() {
            self.simple
        } else {
            total
        }
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total books: {}", self.total_books)?;
        writeln!(f, "Unique authors: {}", self.unique_authors)?;
        if let Some(years) = &self.years {
            writeln!(f, "Year range: {} - {}", years.min, years.max)?;
        }
        if let Some(ratings) = &self.ratings {
            writeln!(f, "Average rating: {:.2}", ratings.average)?;
            writeln!(f, "Rating range: {:.1} - {:.1}", ratings.min, ratings.max)?;
        }
        if let Some(prices) = &self.prices {
            writeln!(f, "Average price: ${:.2}", prices.average)?;
            writeln!(f, "Price range: ${} - ${}", prices.min, prices.max)?;
        }
        if !self.genres.is_empty() {
            writeln!(f, "Genre distribution:")?;
            for share in &self.genres {
                writeln!(
                    f,
                    "{:<15}: {} books ({:.1}%)",
                    share.genre, share.count, share.percentage
                )?;
            }
        }
        Ok(())
    }
}
