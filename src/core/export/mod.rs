//! Export of the record list into downloadable artifacts.
//!
//! Each format is a thin renderer over the shared [`Report`] model; the
//! [`Exporter`] builds the model, guards the empty-library case, and names
//! the artifact after the current date, exactly mirroring the actions the
//! web shell exposed.

pub mod report;

mod csv;
mod excel;
mod html;
mod print;
mod text;

pub use report::{Report, ReportRow, ReportStats};

use crate::{Book, MaktabatiError, Result};

/// A named, downloadable blob produced by one export operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Cosmetic progress reporting for the export operations.
///
/// Everything is best-effort: the default bodies do nothing, so a host
/// without a progress bar simply passes [`NoProgress`].
pub trait ProgressSink {
    fn update(&mut self, message: &str, percent: u8) {
        let _ = (message, percent);
    }
    fn clear(&mut self) {}
}

/// A sink that ignores all progress updates.
pub struct NoProgress;

impl ProgressSink for NoProgress {}

/// Fixed badge palette for the known categories; anything else falls back
/// to grey.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "أدب" => "#3498db",
        "علمي" => "#2ecc71",
        "تاريخ" => "#e74c3c",
        "ديني" => "#9b59b6",
        "فلسفة" => "#f39c12",
        _ => "#95a5a6",
    }
}

/// Trims `text`, mapping a missing value to the empty string.
pub fn clean_text(text: Option<&str>) -> &str {
    text.unwrap_or("").trim()
}

/// Escapes `text` for embedding in HTML element content or attributes.
pub(crate) fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Current local date used in artifact filenames and report headers.
pub(crate) fn today_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// One export operation per target format over a borrowed record list.
pub struct Exporter<'a> {
    books: &'a [Book],
}

impl<'a> Exporter<'a> {
    pub fn new(books: &'a [Book]) -> Self {
        Self { books }
    }

    /// Guards the empty library, builds the shared [`Report`], then hands
    /// off to the format-specific closure.
    fn run<F>(
        &self,
        progress: &mut dyn ProgressSink,
        preparing: &str,
        render: F,
    ) -> Result<ExportArtifact>
    where
        F: FnOnce(&Report) -> ExportArtifact,
    {
        progress.update(preparing, 10);
        if self.books.is_empty() {
            progress.clear();
            return Err(MaktabatiError::EmptyLibrary);
        }
        progress.update("جاري تنظيم البيانات...", 30);
        let report = Report::build(self.books);
        progress.update("جاري حفظ الملف...", 80);
        let artifact = render(&report);
        progress.update("تم! ✅", 100);
        progress.clear();
        Ok(artifact)
    }

    /// Styled table document served as an Excel-compatible `.xls`.
    pub fn excel(&self, progress: &mut dyn ProgressSink) -> Result<ExportArtifact> {
        self.run(progress, "جاري تحضير بيانات Excel...", |report| {
            ExportArtifact {
                file_name: format!("مكتبتي_{}.xls", report.date_stamp),
                mime_type: "application/vnd.ms-excel",
                bytes: excel::render(report).into_bytes(),
            }
        })
    }

    /// UTF-8 CSV with a leading byte-order mark for spreadsheet
    /// compatibility with Arabic text.
    pub fn csv(&self, progress: &mut dyn ProgressSink) -> Result<ExportArtifact> {
        self.run(progress, "جاري إنشاء CSV...", |report| ExportArtifact {
            file_name: format!("مكتبتي_{}.csv", report.date_stamp),
            mime_type: "text/csv;charset=utf-8",
            bytes: csv::render(report).into_bytes(),
        })
    }

    /// Minimal print-oriented document that asks the platform to open its
    /// print dialog on load. Serves both the PDF and the print-view
    /// actions.
    pub fn print_document(&self, progress: &mut dyn ProgressSink) -> Result<ExportArtifact> {
        self.run(progress, "جاري إنشاء PDF...", |report| ExportArtifact {
            file_name: format!("مكتبتي_طباعة_{}.html", report.date_stamp),
            mime_type: "text/html;charset=utf-8",
            bytes: print::render(report).into_bytes(),
        })
    }

    /// Self-contained styled web page with summary tiles plus the table.
    pub fn html_page(&self, progress: &mut dyn ProgressSink) -> Result<ExportArtifact> {
        self.run(progress, "جاري إنشاء صفحة ويب...", |report| ExportArtifact {
            file_name: format!("مكتبتي_{}.html", report.date_stamp),
            mime_type: "text/html;charset=utf-8",
            bytes: html::render(report).into_bytes(),
        })
    }

    /// Human-readable line-oriented dump, one labeled block per book.
    pub fn plain_text(&self, progress: &mut dyn ProgressSink) -> Result<ExportArtifact> {
        self.run(progress, "جاري إنشاء ملف نصي...", |report| ExportArtifact {
            file_name: format!("مكتبتي_{}.txt", report.date_stamp),
            mime_type: "text/plain;charset=utf-8",
            bytes: text::render(report).into_bytes(),
        })
    }

    /// Pretty-printed record-list JSON; also the import format.
    pub fn json(&self, progress: &mut dyn ProgressSink) -> Result<ExportArtifact> {
        progress.update("جاري تصدير البيانات...", 10);
        if self.books.is_empty() {
            progress.clear();
            return Err(MaktabatiError::EmptyLibrary);
        }
        let blob = serde_json::to_string_pretty(self.books)?;
        progress.update("تم! ✅", 100);
        progress.clear();
        Ok(ExportArtifact {
            file_name: format!("مكتبتي_{}.json", today_stamp()),
            mime_type: "application/json;charset=utf-8",
            bytes: blob.into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Book;

    fn sample_books() -> Vec<Book> {
        vec![Book {
            id: "id-1".to_string(),
            title: "الأيام".to_string(),
            author: "طه حسين".to_string(),
            year: Some("1929".to_string()),
            publisher: Some("دار المعارف".to_string()),
            category: Some("أدب".to_string()),
            notes: Some("سيرة ذاتية".to_string()),
            created_at: "2026-08-23".to_string(),
        }]
    }

    /// Records every call so tests can check the hooks are driven.
    #[derive(Default)]
    struct RecordingSink {
        updates: Vec<(String, u8)>,
        cleared: usize,
    }

    impl ProgressSink for RecordingSink {
        fn update(&mut self, message: &str, percent: u8) {
            self.updates.push((message.to_string(), percent));
        }
        fn clear(&mut self) {
            self.cleared += 1;
        }
    }

    #[test]
    fn test_empty_library_aborts_every_format() {
        let books: Vec<Book> = Vec::new();
        let exporter = Exporter::new(&books);
        let mut sink = NoProgress;

        for result in [
            exporter.excel(&mut sink),
            exporter.csv(&mut sink),
            exporter.print_document(&mut sink),
            exporter.html_page(&mut sink),
            exporter.plain_text(&mut sink),
            exporter.json(&mut sink),
        ] {
            assert!(matches!(result, Err(MaktabatiError::EmptyLibrary)));
        }
    }

    #[test]
    fn test_progress_is_driven_and_cleared() {
        let books = sample_books();
        let exporter = Exporter::new(&books);
        let mut sink = RecordingSink::default();

        exporter.csv(&mut sink).unwrap();
        assert_eq!(sink.cleared, 1);
        assert_eq!(sink.updates.first().unwrap().1, 10);
        assert_eq!(sink.updates.last().unwrap().1, 100);
    }

    #[test]
    fn test_progress_cleared_on_empty_abort() {
        let books: Vec<Book> = Vec::new();
        let exporter = Exporter::new(&books);
        let mut sink = RecordingSink::default();

        assert!(exporter.excel(&mut sink).is_err());
        assert_eq!(sink.cleared, 1);
    }

    #[test]
    fn test_artifact_names_carry_date_and_extension() {
        let books = sample_books();
        let exporter = Exporter::new(&books);
        let mut sink = NoProgress;
        let stamp = today_stamp();

        let artifact = exporter.excel(&mut sink).unwrap();
        assert_eq!(artifact.file_name, format!("مكتبتي_{stamp}.xls"));
        assert_eq!(artifact.mime_type, "application/vnd.ms-excel");

        let artifact = exporter.csv(&mut sink).unwrap();
        assert_eq!(artifact.file_name, format!("مكتبتي_{stamp}.csv"));
    }

    #[test]
    fn test_json_export_round_trips_through_import() {
        let books = sample_books();
        let exporter = Exporter::new(&books);
        let artifact = exporter.json(&mut NoProgress).unwrap();

        let content = String::from_utf8(artifact.bytes).unwrap();
        let parsed: Vec<Book> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, books);
    }

    #[test]
    fn test_category_color_palette() {
        assert_eq!(category_color("أدب"), "#3498db");
        assert_eq!(category_color("فلسفة"), "#f39c12");
        assert_eq!(category_color("غير معروف"), "#95a5a6");
        assert_eq!(category_color(""), "#95a5a6");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text(Some("  نص  ")), "نص");
        assert_eq!(clean_text(None), "");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"قال" & 'كتب'</b>"#),
            "&lt;b&gt;&quot;قال&quot; &amp; &#39;كتب&#39;&lt;/b&gt;"
        );
    }
}
