//! Excel-compatible rendering of a [`Report`].
//!
//! Excel opens styled HTML saved as `.xls`, which is how the web version
//! produced its spreadsheet export; the document keeps that shape: RTL
//! header banner, row-per-book table with colored category badges, and a
//! page-broken statistics section.

use super::{category_color, html_escape, Report};
use std::fmt::Write;

pub(crate) fn render(report: &Report) -> String {
    let mut rows = String::new();
    for row in &report.rows {
        let badge = match &row.category {
            Some(category) => format!(
                "<span class=\"badge\" style=\"background:{}\">{}</span>",
                category_color(category),
                html_escape(category)
            ),
            None => "-".to_string(),
        };
        let _ = write!(
            rows,
            "<tr>\
             <td>{index}</td>\
             <td><strong>{title}</strong></td>\
             <td>{author}</td>\
             <td>{year}</td>\
             <td>{badge}</td>\
             <td>{publisher}</td>\
             <td>{created}</td>\
             </tr>",
            index = row.index,
            title = html_escape(&row.title),
            author = html_escape(&row.author),
            year = html_escape(row.year.as_deref().unwrap_or("")),
            badge = badge,
            publisher = html_escape(row.publisher.as_deref().unwrap_or("-")),
            created = html_escape(&row.created_at),
        );
    }

    format!(
        r#"<html>
<head>
<meta charset="UTF-8">
<style>
body {{ font-family: Arial; direction: rtl; }}
.header {{ background: #2c3e50; color: white; padding: 20px; text-align: center; }}
table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
th {{ background: #4a6491; color: white; padding: 12px; border: 1px solid #ddd; }}
td {{ padding: 10px; border: 1px solid #ddd; text-align: right; }}
tr:nth-child(even) {{ background: #f9f9f9; }}
.badge {{ padding: 4px 10px; border-radius: 12px; color: white; font-size: 12px; }}
</style>
</head>
<body>
<div class="header">
<h1>📚 {title}</h1>
<p>{date} | {total} كتاب</p>
</div>
<table>
<tr><th>#</th><th>العنوان</th><th>المؤلف</th><th>السنة</th><th>التصنيف</th><th>الناشر</th><th>التاريخ</th></tr>
{rows}
</table>
<div style="page-break-before: always; padding: 30px;">
<h2>📊 إحصائيات</h2>
<table>
<tr><td>إجمالي الكتب</td><td><strong>{total}</strong></td></tr>
<tr><td>عدد المؤلفين</td><td><strong>{authors}</strong></td></tr>
<tr><td>عدد التصنيفات</td><td><strong>{categories}</strong></td></tr>
</table>
</div>
</body>
</html>"#,
        title = html_escape(&report.title),
        date = report.date_stamp,
        total = report.stats.total,
        authors = report.stats.authors,
        categories = report.stats.categories,
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::report::{ReportRow, ReportStats};

    fn report() -> Report {
        Report {
            title: "مكتبتي الشخصية".to_string(),
            date_stamp: "2026-08-23".to_string(),
            stats: ReportStats {
                total: 1,
                authors: 1,
                categories: 1,
            },
            rows: vec![ReportRow {
                index: 1,
                title: "الأيام <script>".to_string(),
                author: "طه حسين".to_string(),
                year: Some("1929".to_string()),
                category: Some("أدب".to_string()),
                publisher: None,
                notes: None,
                created_at: "2026-08-23".to_string(),
            }],
        }
    }

    #[test]
    fn test_document_carries_table_and_stats_section() {
        let doc = render(&report());
        assert!(doc.contains("<th>العنوان</th>"));
        assert!(doc.contains("إجمالي الكتب"));
        assert!(doc.contains("page-break-before: always"));
        assert!(doc.contains("direction: rtl"));
    }

    #[test]
    fn test_category_badge_uses_palette_color() {
        let doc = render(&report());
        assert!(doc.contains("background:#3498db"));
        assert!(doc.contains(">أدب</span>"));
    }

    #[test]
    fn test_field_content_is_escaped() {
        let doc = render(&report());
        assert!(doc.contains("الأيام &lt;script&gt;"));
        assert!(!doc.contains("الأيام <script>"));
    }

    #[test]
    fn test_missing_publisher_renders_dash() {
        let doc = render(&report());
        assert!(doc.contains("<td>-</td>"));
    }
}
