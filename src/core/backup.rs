//! Timestamped backup snapshots and the periodic backup scheduler.
//!
//! Snapshots live in the same key/value store as the record list, under
//! `backup_<millis>` keys, so a restore never needs anything beyond the
//! library file itself.

use crate::{Book, Library, Result};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// Prefix of every snapshot key; the suffix is a Unix millisecond timestamp.
pub const BACKUP_PREFIX: &str = "backup_";

/// Cadence of the automatic backup, unchanged from the web version's daily timer.
pub const DEFAULT_BACKUP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Snapshots the current record list under a timestamp-qualified key and
/// returns that key.
pub fn create_backup(library: &mut Library) -> Result<String> {
    let books = library.list()?;
    let blob = serde_json::to_string(&books)?;
    let key = format!(
        "{BACKUP_PREFIX}{}",
        chrono::Utc::now().timestamp_millis()
    );
    library.storage().set(&key, &blob)?;
    debug!("wrote backup {key} ({} books)", books.len());
    Ok(key)
}

/// Returns the most recently timestamped snapshot that still parses,
/// together with its key.
///
/// Keys whose payload is no longer valid JSON are skipped with a warning;
/// older snapshots are then considered in turn.
pub fn latest_backup(library: &Library) -> Result<Option<(String, Vec<Book>)>> {
    let mut candidates: Vec<(i64, String)> = library
        .storage()
        .keys_with_prefix(BACKUP_PREFIX)?
        .into_iter()
        .filter_map(|key| {
            let stamp = key[BACKUP_PREFIX.len()..].parse::<i64>().ok()?;
            Some((stamp, key))
        })
        .collect();
    candidates.sort_by_key(|(stamp, _)| std::cmp::Reverse(*stamp));

    for (_, key) in candidates {
        let Some(blob) = library.storage().get(&key)? else {
            continue;
        };
        match serde_json::from_str(&blob) {
            Ok(books) => return Ok(Some((key, books))),
            Err(e) => warn!("skipping unreadable backup {key}: {e}"),
        }
    }
    Ok(None)
}

/// Replaces the store with the newest usable snapshot.
///
/// Returns `false`, leaving the store untouched, when no snapshot exists.
pub fn restore_latest(library: &mut Library) -> Result<bool> {
    let Some((key, books)) = latest_backup(library)? else {
        return Ok(false);
    };
    library.replace_all(books)?;
    debug!("restored from backup {key}");
    Ok(true)
}

/// Explicit model of the web version's fire-and-forget daily backup timer.
///
/// The host calls [`maybe_run`](Self::maybe_run) opportunistically (on user
/// actions, on a coarse tick); a backup is taken once per elapsed interval
/// and there is no feedback channel beyond the returned key. Runs missed
/// while the application was closed are not caught up: the first call after
/// construction only starts the clock.
pub struct BackupScheduler {
    interval: Duration,
    last_run: Option<Instant>,
}

impl BackupScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Scheduler with the default daily cadence.
    pub fn daily() -> Self {
        Self::new(DEFAULT_BACKUP_INTERVAL)
    }

    /// Takes a backup when the interval has elapsed since the last run.
    ///
    /// Returns the snapshot key when a backup was taken, `None` otherwise.
    pub fn maybe_run(&mut self, library: &mut Library) -> Result<Option<String>> {
        self.maybe_run_at(Instant::now(), library)
    }

    fn maybe_run_at(&mut self, now: Instant, library: &mut Library) -> Result<Option<String>> {
        match self.last_run {
            None => {
                self.last_run = Some(now);
                Ok(None)
            }
            Some(last) if now.duration_since(last) >= self.interval => {
                let key = create_backup(library)?;
                self.last_run = Some(now);
                Ok(Some(key))
            }
            Some(_) => Ok(None),
        }
    }
}
