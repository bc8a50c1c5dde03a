//! The book record and its add/update input structures.
//!
//! Persisted records are camelCase JSON, byte-compatible with the blobs
//! the web version stored: optional fields are written as `""` rather than
//! `null`, and `year` may arrive as a bare JSON number in old seed data,
//! so both directions go through the [`lenient`] codec.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One catalogued book entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier, generated at creation and never reassigned.
    pub id: String,
    pub title: String,
    pub author: String,
    /// Publication year as an integer-like string; `None` when unknown.
    #[serde(default, with = "lenient")]
    pub year: Option<String>,
    #[serde(default, with = "lenient")]
    pub publisher: Option<String>,
    /// Conventionally one of the fixed set أدب/علمي/تاريخ/ديني/فلسفة/أخرى,
    /// but any non-empty string is preserved as-is.
    #[serde(default, with = "lenient")]
    pub category: Option<String>,
    #[serde(default, with = "lenient")]
    pub notes: Option<String>,
    /// Capture date (`%Y-%m-%d`), immutable after creation.
    #[serde(default)]
    pub created_at: String,
}

/// Input for the add operation: everything the user supplies, nothing the
/// system generates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a book, merged field-by-field onto the stored record.
///
/// `Some(value)` sets a field; `None` leaves it untouched. For the optional
/// fields, setting an empty string clears the field. `id` and `created_at`
/// are deliberately absent: they never change after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Trims `value` and maps the empty result to `None`.
pub(crate) fn clean(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

impl NewBook {
    /// Validates the input and promotes it to a full [`Book`] with a fresh
    /// identifier and today's capture date.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MaktabatiError::Validation`] when the title or the
    /// author is empty after trimming.
    pub fn into_book(self) -> crate::Result<Book> {
        let title = self.title.trim().to_string();
        let author = self.author.trim().to_string();
        if title.is_empty() || author.is_empty() {
            return Err(crate::MaktabatiError::Validation(
                "الرجاء إدخال عنوان الكتاب واسم المؤلف".to_string(),
            ));
        }
        Ok(Book {
            id: Uuid::new_v4().to_string(),
            title,
            author,
            year: clean(self.year),
            publisher: clean(self.publisher),
            category: clean(self.category),
            notes: clean(self.notes),
            created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        })
    }
}

impl BookPatch {
    /// Merges the patch onto `book`, touching only the fields that are set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MaktabatiError::Validation`] when the patch would
    /// leave the title or the author empty.
    pub fn apply(self, book: &mut Book) -> crate::Result<()> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(crate::MaktabatiError::Validation(
                    "الرجاء إدخال عنوان الكتاب واسم المؤلف".to_string(),
                ));
            }
        }
        if let Some(author) = &self.author {
            if author.trim().is_empty() {
                return Err(crate::MaktabatiError::Validation(
                    "الرجاء إدخال عنوان الكتاب واسم المؤلف".to_string(),
                ));
            }
        }
        if let Some(title) = self.title {
            book.title = title.trim().to_string();
        }
        if let Some(author) = self.author {
            book.author = author.trim().to_string();
        }
        if let Some(year) = self.year {
            book.year = clean(Some(year));
        }
        if let Some(publisher) = self.publisher {
            book.publisher = clean(Some(publisher));
        }
        if let Some(category) = self.category {
            book.category = clean(Some(category));
        }
        if let Some(notes) = self.notes {
            book.notes = clean(Some(notes));
        }
        Ok(())
    }
}

/// Serde codec for the optional text fields of a [`Book`].
///
/// Reads `null`, `""`, a plain string, or a bare number (the web version's
/// seed data stored years as JSON numbers); writes `None` back out as `""`
/// so the persisted shape matches what it produced.
mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(D::Error::custom(format!(
                "expected a string or number, got {other}"
            ))),
        }
    }

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }
}
