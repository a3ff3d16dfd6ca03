use super::author_matches;
use crate::models::Book;

/// One line of a price listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedTitle {
    pub title: String,
    pub price: i32,
}

/// Prices of everything one author wrote, plus the running total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceSummary {
    /// Matched books in file order.
    pub entries: Vec<PricedTitle>,
    /// Sum of `entries[..].price`, widened so large catalogues cannot overflow.
    pub total: i64,
}

impl PriceSummary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Mean price, or `None` when nothing matched. Callers are expected to
    /// check for emptiness before presenting an average.
    pub fn average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.total as f64 / self.entries.len() as f64)
        }
    }
}

/// Collect `(title, price)` pairs for every book by `name` (case-insensitive,
/// trimmed) together with their sum.
pub fn price_summary(books: &[Book], name: &str) -> PriceSummary {
    let name = name.trim();
    let mut summary = PriceSummary::default();
    for book in books.iter().filter(|book| author_matches(&book.author, name)) {
        summary.total += i64::from(book.price);
        summary.entries.push(PricedTitle {
            title: book.title.clone(),
            price: book.price,
        });
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(title: &str, author: &str, price: i32) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            user_rating: 4.8,
            reviews: 60000,
            price,
            year: 2018,
            genre: "Non Fiction".to_string(),
        }
    }

    #[test]
    fn totals_and_averages_matching_prices() {
        let books = vec![
            priced("Becoming", "Michelle Obama", 11),
            priced("Educated", "Tara Westover", 16),
            priced("Becoming", "michelle obama", 12),
        ];

        let summary = price_summary(&books, "Michelle Obama");

        assert_eq!(summary.count(), 2);
        assert_eq!(summary.total, 23);
        assert_eq!(summary.average(), Some(11.5));
        assert_eq!(
            summary.entries,
            [
                PricedTitle { title: "Becoming".to_string(), price: 11 },
                PricedTitle { title: "Becoming".to_string(), price: 12 },
            ]
        );
    }

    #[test]
    fn unknown_author_has_no_average() {
        let books = vec![priced("Educated", "Tara Westover", 16)];
        let summary = price_summary(&books, "Nobody");

        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average(), None);
    }

    #[test]
    fn total_does_not_overflow_i32() {
        let books = vec![
            priced("a", "Rich", i32::MAX),
            priced("b", "Rich", i32::MAX),
        ];

        assert_eq!(price_summary(&books, "rich").total, 2 * i64::from(i32::MAX));
    }
}
