//! Print-oriented rendering of a [`Report`].
//!
//! A deliberately minimal document: print margins, a bordered table, and an
//! on-load `window.print()` hook so opening the file immediately raises the
//! platform's print/save-as-PDF dialog. The dialog's window belongs to the
//! user; nothing here waits on it.

use super::{html_escape, Report};
use std::fmt::Write;

pub(crate) fn render(report: &Report) -> String {
    let mut rows = String::new();
    for row in &report.rows {
        let _ = write!(
            rows,
            "<tr>\
             <td>{index}</td>\
             <td>{title}</td>\
             <td>{author}</td>\
             <td>{year}</td>\
             <td>{category}</td>\
             <td>{created}</td>\
             </tr>",
            index = row.index,
            title = html_escape(&row.title),
            author = html_escape(&row.author),
            year = html_escape(row.year.as_deref().unwrap_or("")),
            category = html_escape(row.category.as_deref().unwrap_or("")),
            created = html_escape(&row.created_at),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html dir="rtl">
<head>
<meta charset="UTF-8">
<title>مكتبتي</title>
<style>
@media print {{ @page {{ margin: 20mm; }} }}
body {{ font-family: Arial; direction: rtl; padding: 20px; }}
h1 {{ color: #2c3e50; text-align: center; }}
table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
th, td {{ border: 1px solid #000; padding: 8px; text-align: right; }}
th {{ background: #4a6491; color: white; }}
</style>
</head>
<body>
<h1>مكتبتي ({total})</h1>
<p style="text-align: center;">{date}</p>
<table>
<tr><th>#</th><th>العنوان</th><th>المؤلف</th><th>السنة</th><th>التصنيف</th><th>التاريخ</th></tr>
{rows}
</table>
<script>window.onload = () => window.print();</script>
</body>
</html>"#,
        total = report.stats.total,
        date = report.date_stamp,
        rows = rows,
    )
}
