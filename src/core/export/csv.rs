//! Delimited-text rendering of a [`Report`].

use super::Report;

/// Byte-order mark so spreadsheet applications detect UTF-8 and render the
/// Arabic text correctly.
const BOM: char = '\u{FEFF}';

const HEADER: &str = "رقم,العنوان,المؤلف,السنة,التصنيف,الناشر,ملاحظات,التاريخ";

/// Quotes `field` when it contains the delimiter, a quote, or a newline,
/// doubling any internal quotes.
pub(crate) fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub(crate) fn render(report: &Report) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);
    out.push('\n');

    for row in &report.rows {
        let fields = [
            row.index.to_string(),
            csv_escape(&row.title),
            csv_escape(&row.author),
            csv_escape(row.year.as_deref().unwrap_or("")),
            csv_escape(row.category.as_deref().unwrap_or("")),
            csv_escape(row.publisher.as_deref().unwrap_or("")),
            csv_escape(row.notes.as_deref().unwrap_or("")),
            csv_escape(&row.created_at),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}
