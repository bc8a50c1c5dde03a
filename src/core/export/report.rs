//! The structured document model shared by every export renderer.
//!
//! Renderers never look at [`Book`](crate::Book) directly: the `Report` is
//! built once from the record list and carries everything a format needs,
//! so tests can assert on the model without parsing generated markup.

use crate::Book;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Totals shown in the summary section of the tabular exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total: usize,
    pub authors: usize,
    pub categories: usize,
}

/// One row of the rendered table, with a 1-based display index.
///
/// Optional fields stay `None` here; each renderer chooses its own
/// placeholder (`غير محدد`, `-`, or blank) at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub index: usize,
    pub title: String,
    pub author: String,
    pub year: Option<String>,
    pub category: Option<String>,
    pub publisher: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

/// A render-ready snapshot of the library at export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Document heading, the application's display name.
    pub title: String,
    /// Localized current date, also used in artifact filenames.
    pub date_stamp: String,
    pub stats: ReportStats,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn build(books: &[Book]) -> Self {
        let authors: HashSet<&str> = books
            .iter()
            .map(|b| b.author.as_str())
            .filter(|a| !a.is_empty())
            .collect();
        let categories: HashSet<&str> = books
            .iter()
            .filter_map(|b| b.category.as_deref())
            .collect();

        let rows = books
            .iter()
            .enumerate()
            .map(|(i, b)| ReportRow {
                index: i + 1,
                title: b.title.clone(),
                author: b.author.clone(),
                year: b.year.clone(),
                category: b.category.clone(),
                publisher: b.publisher.clone(),
                notes: b.notes.clone(),
                created_at: b.created_at.clone(),
            })
            .collect();

        Self {
            title: "مكتبتي الشخصية".to_string(),
            date_stamp: super::today_stamp(),
            stats: ReportStats {
                total: books.len(),
                authors: authors.len(),
                categories: categories.len(),
            },
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, category: Option<&str>) -> Book {
        Book {
            id: format!("id-{title}"),
            title: title.to_string(),
            author: author.to_string(),
            year: Some("1929".to_string()),
            publisher: None,
            category: category.map(str::to_string),
            notes: None,
            created_at: "2026-08-23".to_string(),
        }
    }

    #[test]
    fn test_rows_are_indexed_from_one_in_order() {
        let books = vec![
            book("الأيام", "طه حسين", Some("أدب")),
            book("الكون", "كارل ساجان", Some("علمي")),
        ];
        let report = Report::build(&books);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].index, 1);
        assert_eq!(report.rows[0].title, "الأيام");
        assert_eq!(report.rows[1].index, 2);
        assert_eq!(report.rows[1].title, "الكون");
    }

    #[test]
    fn test_stats_count_distinct_authors_and_categories() {
        let books = vec![
            book("الأيام", "طه حسين", Some("أدب")),
            book("في الشعر الجاهلي", "طه حسين", Some("أدب")),
            book("الكون", "كارل ساجان", None),
        ];
        let report = Report::build(&books);
        assert_eq!(report.stats.total, 3);
        assert_eq!(report.stats.authors, 2);
        assert_eq!(report.stats.categories, 1);
        assert_eq!(report.title, "مكتبتي الشخصية");
        assert!(!report.date_stamp.is_empty());
    }
}
