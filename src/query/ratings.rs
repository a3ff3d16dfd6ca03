use crate::models::Book;

/// Books whose stored rating is exactly `rating`, in file order.
///
/// The comparison is plain floating point equality with no tolerance. A value
/// parsed from `"4.7"` matches another value parsed from `"4.7"` or `"4.70"`,
/// but not one that merely rounds to it.
#[allow(clippy::float_cmp)]
pub fn books_with_rating(books: &[Book], rating: f64) -> Vec<&Book> {
    books
        .iter()
        .filter(|book| book.user_rating == rating)
        .collect()
}
