use std::collections::BTreeSet;

use super::author_matches;
use crate::models::Book;

/// Number of books whose author matches `name`, ignoring case. The requested
/// name is trimmed first; zero is an ordinary answer.
pub fn count_by_author(books: &[Book], name: &str) -> usize {
    let name = name.trim();
    books
        .iter()
        .filter(|book| author_matches(&book.author, name))
        .count()
}

/// Distinct authors in lexicographic order. Spellings that differ only in case
/// are kept as separate entries, exactly as they appear in the data.
pub fn list_authors(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .map(|book| book.author.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Every book by `name` (case-insensitive), in the order the file listed them.
pub fn books_by_author<'a>(books: &'a [Book], name: &str) -> Vec<&'a Book> {
    let name = name.trim();
    books
        .iter()
        .filter(|book| author_matches(&book.author, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            user_rating: 4.5,
            reviews: 100,
            price: 10,
            year: 2015,
            genre: "Fiction".to_string(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("A Game of Thrones", "George R. R. Martin"),
            book("Becoming", "Michelle Obama"),
            book("A Dance with Dragons", "George R. R. Martin"),
            book("Fire & Blood", "george r. r. martin"),
            book("Adult Coloring Book", "Adult Coloring Book Designs"),
        ]
    }

    #[test]
    fn count_ignores_case_and_surrounding_whitespace() {
        let books = shelf();

        assert_eq!(count_by_author(&books, "George R. R. Martin"), 3);
        assert_eq!(count_by_author(&books, "  GEORGE R. R. MARTIN "), 3);
        assert_eq!(count_by_author(&books, "george r. r. martin"), 3);
    }

    #[test]
    fn count_requires_full_name() {
        let books = shelf();

        assert_eq!(count_by_author(&books, "Martin"), 0);
        assert_eq!(count_by_author(&books, "Nobody"), 0);
    }

    #[test]
    fn authors_are_sorted_and_case_sensitive() {
        let authors = list_authors(&shelf());

        assert_eq!(
            authors,
            [
                "Adult Coloring Book Designs",
                "George R. R. Martin",
                "Michelle Obama",
                "george r. r. martin",
            ]
        );
    }

    #[test]
    fn books_by_author_keep_file_order() {
        let books = shelf();
        let titles: Vec<_> = books_by_author(&books, "george r. r. martin")
            .iter()
            .map(|b| b.title.as_str())
            .collect();

        assert_eq!(titles, ["A Game of Thrones", "A Dance with Dragons", "Fire & Blood"]);
    }

    #[test]
    fn empty_dataset_has_no_authors() {
        assert!(list_authors(&[]).is_empty());
        assert!(books_by_author(&[], "Anyone").is_empty());
    }
}
