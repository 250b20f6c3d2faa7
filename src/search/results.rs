//! Result records and ordering
//!
//! Accepted entries are materialized into `FoundEntry` records by snapshotting
//! metadata at acceptance time. Records are immutable once built; the only
//! post-traversal operation is an optional stable sort plus reversal.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::debug;

use super::filter::{EntryKind, classify};

/// One filesystem entry that passed the filter.
#[derive(Debug, Clone)]
pub struct FoundEntry {
    pub path: PathBuf,
    /// Base name, the string the pattern matched against.
    pub name: String,
    pub kind: EntryKind,
    pub hidden: bool,
    pub readonly: bool,
    /// Byte size; 0 for directories.
    pub size: u64,
    /// Modification time, when the filesystem reports one.
    pub modified: Option<SystemTime>,
}

impl FoundEntry {
    /// Snapshot an accepted entry's metadata.
    ///
    /// Metadata is read here, at acceptance time, rather than at enumeration
    /// time — it is a best-effort snapshot, not transactional. An entry whose
    /// metadata cannot be read (removed mid-scan, permission change) yields
    /// `None` and is skipped.
    pub fn snapshot(path: &Path, name: &str, is_dir: bool, hidden: bool) -> Option<Self> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) => {
                debug!(target: "error", "cannot stat {}: {err}", path.display());
                return None;
            }
        };

        Some(Self {
            path: path.to_path_buf(),
            name: name.to_string(),
            kind: classify(name, is_dir),
            hidden,
            readonly: meta.permissions().readonly(),
            size: if is_dir { 0 } else { meta.len() },
            modified: meta.modified().ok(),
        })
    }
}

/// Sort key for the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending byte size.
    Size,
    /// Ascending modification time; entries without one sort first.
    Time,
}

/// Order the result set.
///
/// Sorts are stable, so entries tied on the key keep their discovery order.
/// `reverse` is applied as a final step to whatever ordering is in effect,
/// sorted or not.
pub fn sort_entries(entries: &mut [FoundEntry], key: Option<SortKey>, reverse: bool) {
    match key {
        Some(SortKey::Size) => entries.sort_by_key(|entry| entry.size),
        Some(SortKey::Time) => entries.sort_by_key(|entry| entry.modified),
        None => {}
    }
    if reverse {
        entries.reverse();
    }
}
