//! Internal domain modules for the Maktabati core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod backup;
pub mod book;
pub mod catalog;
pub mod error;
pub mod export;
pub mod library;
pub mod storage;

#[doc(inline)]
pub use backup::{
    create_backup, latest_backup, restore_latest, BackupScheduler, BACKUP_PREFIX,
    DEFAULT_BACKUP_INTERVAL,
};
#[doc(inline)]
pub use book::{Book, BookPatch, NewBook};
#[doc(inline)]
pub use catalog::{filter_books, BookFilter, FilterOptions};
#[doc(inline)]
pub use error::{MaktabatiError, Result};
#[doc(inline)]
pub use export::{
    category_color, clean_text, ExportArtifact, Exporter, NoProgress, ProgressSink, Report,
    ReportRow, ReportStats,
};
#[doc(inline)]
pub use library::{derive_stats, Library, LibraryStats, BOOKS_KEY};
#[doc(inline)]
pub use storage::Storage;
