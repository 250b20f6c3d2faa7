//! Search configuration types

use std::time::SystemTime;

use glob::Pattern;
use thiserror::Error;

/// Configuration problems detected before any traversal starts.
///
/// These are always fatal: the process reports them and exits without
/// producing partial results.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("--hidden-only and --no-hidden cannot be combined")]
    ConflictingHiddenFlags,

    #[error("unknown debug category '{0}' (expected scan, match, check, or error)")]
    UnknownDebugCategory(String),
}

/// Configuration snapshot for one search invocation.
///
/// Built once from the command line and read-only afterwards; the walker
/// and filter only ever borrow it.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Match any file, not just executables.
    pub match_all: bool,
    /// Report only hidden entries.
    pub hidden_only: bool,
    /// Skip hidden entries entirely.
    pub no_hidden: bool,
    /// Stop the whole scan after the first accepted entry.
    pub first_match: bool,
    /// Bound recursion depth below each root in global mode.
    pub max_depth: Option<usize>,
    /// Entry names matching any of these glob patterns are skipped,
    /// including the subtrees of matching directories.
    pub exclude_patterns: Vec<String>,
    /// Only report files modified after this time.
    pub newer_than: Option<SystemTime>,
    /// Only report files modified before this time.
    pub older_than: Option<SystemTime>,
}

impl SearchConfig {
    /// Reject contradictory flag combinations before traversal starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hidden_only && self.no_hidden {
            return Err(ConfigError::ConflictingHiddenFlags);
        }
        Ok(())
    }

    /// Check an entry name against the exclusion patterns.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude_patterns
            .iter()
            .any(|pattern| name == pattern || glob_match(pattern, name))
    }

    /// Check a file's modification time against the `newer`/`older` bounds.
    ///
    /// Files without a readable timestamp pass, as do all files when no
    /// bound is configured.
    pub fn within_time_bounds(&self, modified: Option<SystemTime>) -> bool {
        if self.newer_than.is_none() && self.older_than.is_none() {
            return true;
        }
        let Some(mtime) = modified else {
            return true;
        };
        if let Some(newer) = self.newer_than {
            if mtime < newer {
                return false;
            }
        }
        if let Some(older) = self.older_than {
            if mtime > older {
                return false;
            }
        }
        true
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_all: false,
            hidden_only: false,
            no_hidden: false,
            first_match: false,
            max_depth: None,
            exclude_patterns: Vec::new(),
            newer_than: None,
            older_than: None,
        }
    }
}

/// Match a glob pattern against a name.
fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
