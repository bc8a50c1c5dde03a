//! High-level library operations over a Maktabati key/value store.

use crate::{Book, BookPatch, MaktabatiError, NewBook, Result, Storage};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Primary key under which the whole record list is persisted, unchanged
/// from the web version so existing data keeps working.
pub const BOOKS_KEY: &str = "library_books";

/// Storage soft limit in bytes; matches the 5 MB quota browsers give
/// `localStorage`.
const STORAGE_SOFT_LIMIT_BYTES: usize = 5 * 1024 * 1024;

/// Summary statistics re-derived after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    /// Total number of books in the store.
    pub total: usize,
    /// Number of distinct non-empty authors.
    pub authors: usize,
    /// Number of distinct non-empty categories.
    pub categories: usize,
    /// Smallest numeric publication year, when any book has one.
    pub earliest_year: Option<i64>,
    /// Approximate persisted footprint in kilobytes, computed the way the
    /// web version did: UTF-16 code units of the blob times two bytes.
    pub storage_kb: f64,
}

/// An open Maktabati library backed by a [`Storage`].
///
/// `Library` is the primary interface for all record mutations. It is the
/// sole source of truth: every operation reads the persisted list, applies
/// the change, and writes the whole list back, so nothing is cached beyond
/// the derived [`LibraryStats`].
pub struct Library {
    storage: Storage,
    stats: LibraryStats,
}

impl Library {
    /// Creates a new library database at `path` with an empty store.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_storage(Storage::create(path)?)
    }

    /// Opens an existing library database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MaktabatiError::InvalidLibrary`] if the file is not
    /// a Maktabati store, or [`crate::MaktabatiError::Database`] for any
    /// SQLite failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_storage(Storage::open(path)?)
    }

    /// Opens a transient in-memory library.
    pub fn in_memory() -> Result<Self> {
        Self::from_storage(Storage::in_memory()?)
    }

    fn from_storage(storage: Storage) -> Result<Self> {
        let mut library = Self {
            storage,
            stats: LibraryStats::default(),
        };
        library.refresh_stats()?;
        Ok(library)
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns all books in insertion order.
    ///
    /// An absent or malformed persisted blob yields an empty list rather
    /// than an error; a parse failure is logged and the store is treated as
    /// empty until the next successful write.
    pub fn list(&self) -> Result<Vec<Book>> {
        let Some(blob) = self.storage.get(BOOKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(books) => Ok(books),
            Err(e) => {
                warn!("stored book list is malformed, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Validates `new_book`, appends it, and persists the whole list.
    ///
    /// Returns the stored record with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MaktabatiError::Validation`] when the title or the
    /// author is empty.
    pub fn add(&mut self, new_book: NewBook) -> Result<Book> {
        let book = new_book.into_book()?;
        let mut books = self.list()?;
        books.push(book.clone());
        self.save(&books)?;
        debug!("added book {} ({})", book.id, book.title);
        Ok(book)
    }

    /// Merges `patch` onto the book with `id` and persists the list.
    ///
    /// Returns `false`, without touching the store, when no book has that
    /// id.
    pub fn update(&mut self, id: &str, patch: BookPatch) -> Result<bool> {
        let mut books = self.list()?;
        let Some(book) = books.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        patch.apply(book)?;
        self.save(&books)?;
        debug!("updated book {id}");
        Ok(true)
    }

    /// Removes the book with `id`. Returns `false` when no book matched.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let mut books = self.list()?;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Ok(false);
        }
        self.save(&books)?;
        debug!("deleted book {id}");
        Ok(true)
    }

    /// Overwrites the entire list. Used by import and backup restore.
    pub fn replace_all(&mut self, books: Vec<Book>) -> Result<()> {
        self.save(&books)
    }

    /// Deletes the entire persisted collection. Irreversible; callers are
    /// expected to have confirmed with the user first.
    pub fn clear_all(&mut self) -> Result<()> {
        self.storage.remove(BOOKS_KEY)?;
        self.refresh_stats()?;
        debug!("cleared all books");
        Ok(())
    }

    /// Parses `content` as a record-list serialization and replaces the
    /// store with it.
    ///
    /// Returns the number of imported records. Any parse failure, and any
    /// record without a non-empty title and author, rejects the whole
    /// import and leaves the existing data untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MaktabatiError::Import`] describing the first
    /// problem found.
    pub fn import_json(&mut self, content: &str) -> Result<usize> {
        let books: Vec<Book> = serde_json::from_str(content)
            .map_err(|e| MaktabatiError::Import(e.to_string()))?;
        for (index, book) in books.iter().enumerate() {
            if book.title.trim().is_empty() || book.author.trim().is_empty() {
                return Err(MaktabatiError::Import(format!(
                    "record {} is missing a title or an author",
                    index + 1
                )));
            }
        }
        let count = books.len();
        self.replace_all(books)?;
        debug!("imported {count} books");
        Ok(count)
    }

    /// Returns the statistics derived by the last mutation (or open).
    pub fn stats(&self) -> &LibraryStats {
        &self.stats
    }

    /// True once the persisted blob passes 80 % of the 5 MB soft limit.
    pub fn is_storage_nearly_full(&self) -> bool {
        let used_bytes = self.stats.storage_kb * 1024.0;
        used_bytes > STORAGE_SOFT_LIMIT_BYTES as f64 * 0.8
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let blob = serde_json::to_string(books)?;
        self.storage.set(BOOKS_KEY, &blob)?;
        self.refresh_stats()
    }

    pub(crate) fn refresh_stats(&mut self) -> Result<()> {
        let books = self.list()?;
        let blob = self.storage.get(BOOKS_KEY)?.unwrap_or_default();
        self.stats = derive_stats(&books, &blob);
        Ok(())
    }
}

/// Derives [`LibraryStats`] from the record list and its persisted blob.
pub fn derive_stats(books: &[Book], blob: &str) -> LibraryStats {
    let authors: HashSet<&str> = books
        .iter()
        .map(|b| b.author.as_str())
        .filter(|a| !a.is_empty())
        .collect();
    let categories: HashSet<&str> = books
        .iter()
        .filter_map(|b| b.category.as_deref())
        .collect();
    let earliest_year = books
        .iter()
        .filter_map(|b| b.year.as_deref()?.parse::<i64>().ok())
        .min();
    // Browsers store localStorage strings as UTF-16, two bytes per unit;
    // keeping that formula keeps the reported figure comparable.
    let storage_kb = (blob.encode_utf16().count() * 2) as f64 / 1024.0;

    LibraryStats {
        total: books.len(),
        authors: authors.len(),
        categories: categories.len(),
        earliest_year,
        storage_kb,
    }
}
