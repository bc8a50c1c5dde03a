//! Core library for Maktabati — a local-first personal book catalogue.
//!
//! The primary entry point is [`Library`], which represents an open
//! `.maktabati` store file. All record mutations go through `Library`
//! methods; [`catalog`](crate::core::catalog) filters a listed snapshot in
//! memory, and [`Exporter`] renders one into downloadable artifacts.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core`
//! module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    backup::{
        create_backup, latest_backup, restore_latest, BackupScheduler, BACKUP_PREFIX,
        DEFAULT_BACKUP_INTERVAL,
    },
    book::{Book, BookPatch, NewBook},
    catalog::{filter_books, BookFilter, FilterOptions},
    error::{MaktabatiError, Result},
    export,
    export::{
        category_color, clean_text, ExportArtifact, Exporter, NoProgress, ProgressSink, Report,
        ReportRow, ReportStats,
    },
    library::{derive_stats, Library, LibraryStats, BOOKS_KEY},
    storage::Storage,
};
