//! Standalone web-page rendering of a [`Report`]: summary statistic tiles
//! followed by the full table, with all styling inlined so the file opens
//! anywhere.

use super::{html_escape, Report};
use std::fmt::Write;

pub(crate) fn render(report: &Report) -> String {
    let mut rows = String::new();
    for row in &report.rows {
        let _ = write!(
            rows,
            "<tr>\
             <td>{index}</td>\
             <td><strong>{title}</strong></td>\
             <td>{author}</td>\
             <td>{year}</td>\
             <td>{category}</td>\
             <td>{publisher}</td>\
             <td>{created}</td>\
             </tr>",
            index = row.index,
            title = html_escape(&row.title),
            author = html_escape(&row.author),
            year = html_escape(row.year.as_deref().unwrap_or("")),
            category = html_escape(row.category.as_deref().unwrap_or("")),
            publisher = html_escape(row.publisher.as_deref().unwrap_or("-")),
            created = html_escape(&row.created_at),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html dir="rtl" lang="ar">
<head>
<meta charset="UTF-8">
<title>مكتبتي</title>
<style>
body {{ font-family: Arial; direction: rtl; padding: 20px; background: #f5f7fa; }}
.container {{ max-width: 1000px; margin: auto; background: white; padding: 30px; border-radius: 15px; box-shadow: 0 5px 20px rgba(0,0,0,0.1); }}
h1 {{ color: #2c3e50; text-align: center; }}
table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
th {{ background: #4a6491; color: white; padding: 12px; text-align: right; }}
td {{ padding: 10px; border-bottom: 1px solid #eee; text-align: right; }}
tr:hover {{ background: #f9f9f9; }}
.stats {{ display: flex; gap: 20px; margin: 30px 0; flex-wrap: wrap; }}
.stat-box {{ flex: 1; min-width: 200px; background: #f8f9fa; padding: 20px; border-radius: 10px; text-align: center; }}
.stat-number {{ font-size: 2em; color: #4a6491; font-weight: bold; }}
</style>
</head>
<body>
<div class="container">
<h1>📚 {title}</h1>
<p style="text-align: center; color: #666;">{date} | {total} كتاب</p>
<div class="stats">
<div class="stat-box"><div class="stat-number">{total}</div><div>إجمالي الكتب</div></div>
<div class="stat-box"><div class="stat-number">{authors}</div><div>المؤلفون</div></div>
<div class="stat-box"><div class="stat-number">{categories}</div><div>التصنيفات</div></div>
</div>
<table>
<tr><th>#</th><th>العنوان</th><th>المؤلف</th><th>السنة</th><th>التصنيف</th><th>الناشر</th><th>التاريخ</th></tr>
{rows}
</table>
<p style="text-align: center; color: #999; margin-top: 40px;">تم إنشاء هذه الصفحة تلقائياً من نظام إدارة المكتبة الشخصية</p>
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
                total: 2,
                authors: 2,
                categories: 1,
            },
            rows: vec![ReportRow {
                index: 1,
                title: "الكون".to_string(),
                author: "كارل ساجان".to_string(),
                year: Some("1980".to_string()),
                category: Some("علمي".to_string()),
                publisher: Some("دار التنوير".to_string()),
                notes: None,
                created_at: "2026-08-23".to_string(),
            }],
        }
    }

    #[test]
    fn test_page_is_self_contained_and_rtl() {
        let page = render(&report());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html dir="rtl" lang="ar">"#));
        assert!(page.contains("<style>"));
        assert!(!page.contains("<link"));
    }

    #[test]
    fn test_stat_tiles_show_totals() {
        let page = render(&report());
        assert!(page.contains(r#"<div class="stat-number">2</div><div>إجمالي الكتب</div>"#));
        assert!(page.contains(r#"<div class="stat-number">1</div><div>التصنيفات</div>"#));
    }

    #[test]
    fn test_table_row_contents() {
        let page = render(&report());
        assert!(page.contains("<strong>الكون</strong>"));
        assert!(page.contains("<td>دار التنوير</td>"));
    }
}
