//! Directory traversal for both search modes
//!
//! Path-search enumerates each root one level deep; global-search walks
//! whole subtrees. Both apply the filter policy per entry, skip anything
//! unreadable without failing the scan, and honor the first-match
//! short-circuit. Enumeration order is whatever the storage layer presents;
//! nothing here sorts.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::config::SearchConfig;
use super::filter::{accept, is_hidden_name};
use super::pattern::Query;
use super::results::FoundEntry;

/// One pending directory in the global-search work list.
struct Frame {
    path: PathBuf,
    name: String,
    depth: usize,
    /// Roots are containers to scan, never candidates themselves.
    is_root: bool,
}

/// Walks directories and collects entries accepted by the filter policy.
///
/// Borrows the immutable query and configuration; returns an owned result
/// vector from each search call.
pub struct SearchWalker<'a> {
    query: &'a Query,
    config: &'a SearchConfig,
}

impl<'a> SearchWalker<'a> {
    pub fn new(query: &'a Query, config: &'a SearchConfig) -> Self {
        Self { query, config }
    }

    /// Path-search mode: scan each root directory one level deep, in order.
    ///
    /// Unreadable roots are skipped; with `first_match` the scan stops at
    /// the first accepted entry across all roots.
    pub fn search_path(&self, roots: &[PathBuf]) -> Vec<FoundEntry> {
        let mut results = Vec::new();
        for root in roots {
            if self.scan_level(root, &mut results) {
                break;
            }
        }
        results
    }

    /// Global-search mode: walk each root's subtree.
    ///
    /// The walk is an explicit work list rather than recursion, so
    /// pathological directory depth cannot exhaust the call stack. Order is
    /// pre-order with files before subdirectories at every level; a
    /// subdirectory is itself a candidate entry before its contents.
    pub fn search_global(&self, roots: &[PathBuf]) -> Vec<FoundEntry> {
        let mut results = Vec::new();
        'roots: for root in roots {
            let mut pending = vec![Frame {
                path: root.clone(),
                name: String::new(),
                depth: 0,
                is_root: true,
            }];

            while let Some(frame) = pending.pop() {
                if !frame.is_root
                    && self.consider(&frame.path, &frame.name, true, &mut results)
                    && self.config.first_match
                {
                    break 'roots;
                }
                let descend = self.config.max_depth.is_none_or(|max| frame.depth < max);
                if !descend {
                    continue;
                }
                if self.scan_frame(&frame, &mut pending, &mut results) {
                    break 'roots;
                }
            }
        }
        results
    }

    /// Scan one directory level, filtering every entry inline.
    ///
    /// Returns true when the first-match short-circuit fires.
    fn scan_level(&self, dir: &Path, results: &mut Vec<FoundEntry>) -> bool {
        debug!(target: "scan", "scanning {}", dir.display());
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(target: "error", "cannot read {}: {err}", dir.display());
                return false;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(target: "error", "unreadable entry in {}: {err}", dir.display());
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.config.is_excluded(&name) {
                continue;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if self.consider(&entry.path(), &name, is_dir, results) && self.config.first_match {
                return true;
            }
        }
        false
    }

    /// Scan a work-list frame: filter its files, queue its subdirectories.
    ///
    /// A directory that cannot be opened abandons only its own subtree.
    /// Returns true when the first-match short-circuit fires.
    fn scan_frame(
        &self,
        frame: &Frame,
        pending: &mut Vec<Frame>,
        results: &mut Vec<FoundEntry>,
    ) -> bool {
        debug!(target: "scan", "scanning {}", frame.path.display());
        let entries = match fs::read_dir(&frame.path) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(target: "error", "cannot read {}: {err}", frame.path.display());
                return false;
            }
        };

        let mut subdirs = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(target: "error", "unreadable entry in {}: {err}", frame.path.display());
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.config.is_excluded(&name) {
                continue;
            }
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    debug!(target: "error", "unreadable entry in {}: {err}", frame.path.display());
                    continue;
                }
            };

            // file_type() does not follow symlinks, so a symlink to a
            // directory lands in the entry branch below and is never
            // entered. That is the only cycle guard.
            if file_type.is_dir() {
                subdirs.push((entry.path(), name));
            } else if self.consider(&entry.path(), &name, false, results)
                && self.config.first_match
            {
                return true;
            }
        }

        // Push in reverse so the first subdirectory is scanned first.
        for (path, name) in subdirs.into_iter().rev() {
            pending.push(Frame {
                path,
                name,
                depth: frame.depth + 1,
                is_root: false,
            });
        }
        false
    }

    /// Apply the filter policy to one entry, collecting it on acceptance.
    fn consider(
        &self,
        path: &Path,
        name: &str,
        is_dir: bool,
        results: &mut Vec<FoundEntry>,
    ) -> bool {
        let hidden = is_hidden_name(name);
        if !accept(name, is_dir, hidden, self.query, self.config) {
            return false;
        }
        let Some(record) = FoundEntry::snapshot(path, name, is_dir, hidden) else {
            return false;
        };
        if !is_dir && !self.config.within_time_bounds(record.modified) {
            debug!(target: "check", "{name}: rejected (outside time bounds)");
            return false;
        }
        debug!(target: "match", "{}", path.display());
        results.push(record);
        true
    }
}
