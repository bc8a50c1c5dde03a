//! Plain-text rendering of a [`Report`]: a banner, then one labeled block
//! per book separated by rule lines.

use super::Report;
use std::fmt::Write;

pub(crate) fn render(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - تصدير البيانات", report.title);
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for row in &report.rows {
        let _ = writeln!(out, "الكتاب {}:", row.index);
        let _ = writeln!(out, "- العنوان: {}", row.title);
        let _ = writeln!(out, "- المؤلف: {}", row.author);
        let _ = writeln!(out, "- السنة: {}", row.year.as_deref().unwrap_or("غير محدد"));
        let _ = writeln!(
            out,
            "- التصنيف: {}",
            row.category.as_deref().unwrap_or("غير مصنف")
        );
        let _ = writeln!(
            out,
            "- دار النشر: {}",
            row.publisher.as_deref().unwrap_or("-")
        );
        let _ = writeln!(
            out,
            "- الملاحظات: {}",
            row.notes.as_deref().unwrap_or("لا توجد")
        );
        out.push_str(&"-".repeat(30));
        out.push('\n');
    }

    out
}
