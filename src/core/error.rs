//! Error types for the Maktabati core library.

use thiserror::Error;

/// All errors that can occur within the Maktabati core library.
#[derive(Debug, Error)]
pub enum MaktabatiError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Record data could not be serialized to or from JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required field was empty when adding or editing a book.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An export or print operation was invoked on an empty library.
    #[error("The library has no books to export")]
    EmptyLibrary,

    /// Imported content was not a valid record list; the store was left untouched.
    #[error("Import failed: {0}")]
    Import(String),

    /// The opened file is not a valid Maktabati library store.
    #[error("Invalid library: {0}")]
    InvalidLibrary(String),
}

/// Convenience alias that pins the error type to [`MaktabatiError`].
pub type Result<T> = std::result::Result<T, MaktabatiError>;

impl MaktabatiError {
    /// Returns a short message suitable for display to the end user.
    ///
    /// The application surface is Arabic, so these match the notification
    /// strings shown by the shell.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("فشل الحفظ: {e}"),
            Self::Json(e) => format!("خطأ في تنسيق البيانات: {e}"),
            Self::Io(e) => format!("خطأ في الملف: {e}"),
            Self::Validation(msg) => msg.clone(),
            Self::EmptyLibrary => "لا توجد كتب للتصدير".to_string(),
            Self::Import(_) => "خطأ في تنسيق الملف!".to_string(),
            Self::InvalidLibrary(_) => "تعذر فتح ملف المكتبة".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_library_user_message() {
        let e = MaktabatiError::EmptyLibrary;
        assert_eq!(e.user_message(), "لا توجد كتب للتصدير");
    }

    #[test]
    fn test_import_error_is_distinct_from_validation() {
        let import = MaktabatiError::Import("not an array".to_string());
        let validation = MaktabatiError::Validation("عنوان مفقود".to_string());
        assert_ne!(import.user_message(), validation.user_message());
        assert!(import.to_string().contains("not an array"));
    }
}
