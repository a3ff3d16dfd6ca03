//! Read-only queries over a loaded dataset. Every function borrows the
//! caller's `&[Book]` and returns fresh values, so calling the same query twice
//! on the same slice always gives the same answer.

mod authors;
mod prices;
mod ratings;
mod statistics;

pub use authors::{books_by_author, count_by_author, list_authors};
pub use prices::{price_summary, PriceSummary, PricedTitle};
pub use ratings::books_with_rating;
pub use statistics::{dataset_statistics, DatasetStatistics, GenreShare, Range, Summary};

/// Case-insensitive, whole-string comparison of a stored author against a
/// requested name. Characters are compared one by one and match when they are
/// equal outright, equal once upper-cased, or equal once lower-cased. Strings
/// of different length never match.
pub(crate) fn author_matches(stored: &str, requested: &str) -> bool {
    stored.chars().count() == requested.chars().count()
        && stored.chars().zip(requested.chars()).all(|(a, b)| {
            a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("George R. R. Martin", "george r. r. martin", true)]
    #[case("George R. R. Martin", "GEORGE R. R. MARTIN", true)]
    #[case("Gabriel García Márquez", "GABRIEL GARCÍA MÁRQUEZ", true)]
    #[case("George R. R. Martin", "George R. R.", false)]
    #[case("George R. R. Martin", "George R. R. Martin ", false)]
    #[case("", "", true)]
    fn matches_whole_name_ignoring_case(
        #[case] stored: &str,
        #[case] requested: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(author_matches(stored, requested), expected);
    }
}
