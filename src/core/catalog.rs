//! In-memory filtering over the record list and derivation of the filter
//! dropdown options.

use crate::Book;
use serde::{Deserialize, Serialize};

/// Search and filter criteria. Empty criteria pass everything, so the
/// default filter returns the full list unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFilter {
    /// Case-insensitive substring matched against title, author, and notes.
    #[serde(default)]
    pub search: String,
    /// Exact category match.
    #[serde(default)]
    pub category: String,
    /// Exact year string match.
    #[serde(default)]
    pub year: String,
}

impl BookFilter {
    /// True when `book` satisfies all three criteria.
    pub fn matches(&self, book: &Book) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
                || book
                    .notes
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
        };
        let matches_category =
            self.category.is_empty() || book.category.as_deref() == Some(self.category.as_str());
        let matches_year =
            self.year.is_empty() || book.year.as_deref() == Some(self.year.as_str());

        matches_search && matches_category && matches_year
    }
}

/// Returns the books satisfying `filter`, preserving their stored order.
pub fn filter_books(books: &[Book], filter: &BookFilter) -> Vec<Book> {
    books.iter().filter(|b| filter.matches(b)).cloned().collect()
}

/// The distinct values available for the category and year dropdowns,
/// derived from the current full record list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Distinct non-empty categories in first-seen order.
    pub categories: Vec<String>,
    /// Distinct non-empty years, sorted descending numerically.
    pub years: Vec<String>,
}

impl FilterOptions {
    pub fn derive(books: &[Book]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for category in books.iter().filter_map(|b| b.category.as_deref()) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }

        let mut years: Vec<String> = Vec::new();
        for year in books.iter().filter_map(|b| b.year.as_deref()) {
            if !years.iter().any(|y| y == year) {
                years.push(year.to_string());
            }
        }
        // Numeric years sort descending; anything unparseable sinks to the end.
        years.sort_by_key(|y| std::cmp::Reverse(y.parse::<i64>().unwrap_or(i64::MIN)));

        Self { categories, years }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, year: &str, category: &str, notes: &str) -> Book {
        Book {
            id: format!("id-{title}"),
            title: title.to_string(),
            author: author.to_string(),
            year: crate::core::book::clean(Some(year.to_string())),
            publisher: None,
            category: crate::core::book::clean(Some(category.to_string())),
            notes: crate::core::book::clean(Some(notes.to_string())),
            created_at: "2026-08-23".to_string(),
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("الأيام", "طه حسين", "1929", "أدب", "سيرة ذاتية"),
            book("الكون", "كارل ساجان", "1980", "علمي", "علم الفلك للجميع"),
        ]
    }

    #[test]
    fn test_empty_filter_returns_full_list_in_order() {
        let books = shelf();
        let filtered = filter_books(&books, &BookFilter::default());
        assert_eq!(filtered, books);
    }

    #[test]
    fn test_year_filter_is_exact_string_match() {
        let books = shelf();
        let filter = BookFilter {
            year: "1980".to_string(),
            ..Default::default()
        };
        let filtered = filter_books(&books, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "الكون");

        // "198" is not a year in the list, and substrings do not count
        let filter = BookFilter {
            year: "198".to_string(),
            ..Default::default()
        };
        assert!(filter_books(&books, &filter).is_empty());
    }

    #[test]
    fn test_search_matching_no_field_returns_empty() {
        let books = shelf();
        let filter = BookFilter {
            search: "جبران".to_string(),
            ..Default::default()
        };
        assert!(filter_books(&books, &filter).is_empty());
    }

    #[test]
    fn test_search_covers_title_author_and_notes() {
        let books = shelf();
        for needle in ["الأيام", "ساجان", "الفلك"] {
            let filter = BookFilter {
                search: needle.to_string(),
                ..Default::default()
            };
            assert_eq!(filter_books(&books, &filter).len(), 1, "needle {needle}");
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let books = vec![book("Cosmos", "Carl Sagan", "1980", "علمي", "")];
        let filter = BookFilter {
            search: "cosmos".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_books(&books, &filter).len(), 1);
        let filter = BookFilter {
            search: "SAGAN".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_books(&books, &filter).len(), 1);
    }

    #[test]
    fn test_predicates_are_anded() {
        let books = shelf();
        let filter = BookFilter {
            search: "الكون".to_string(),
            category: "أدب".to_string(),
            ..Default::default()
        };
        assert!(filter_books(&books, &filter).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let books = shelf();
        let filter = BookFilter {
            category: "أدب".to_string(),
            ..Default::default()
        };
        let once = filter_books(&books, &filter);
        let twice = filter_books(&once, &filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_options_derivation() {
        let mut books = shelf();
        books.push(book("في الشعر الجاهلي", "طه حسين", "1926", "أدب", ""));
        books.push(book("بلا تصنيف", "مجهول", "", "", ""));

        let options = FilterOptions::derive(&books);
        assert_eq!(options.categories, vec!["أدب", "علمي"]);
        assert_eq!(options.years, vec!["1980", "1929", "1926"]);
    }
}
