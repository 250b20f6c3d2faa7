//! Filter policy for search candidates
//!
//! A pure accept/reject decision per filesystem entry, layered in a fixed
//! order: hidden rules first, then the executable-extension gate, then the
//! pattern match. Classification into directory/executable/file lives here
//! too so the filter and every output format agree on an entry's kind.

use log::debug;

use super::config::SearchConfig;
use super::pattern::Query;

/// Filename suffixes treated as marking an executable.
pub const EXECUTABLE_EXTENSIONS: &[&str] =
    &[".exe", ".bat", ".cmd", ".com", ".ps1", ".py", ".sh"];

/// What kind of entry a match is, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Executable,
    File,
}

impl EntryKind {
    /// Stable lowercase label used by the JSON and CSV renderings.
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::Executable => "executable",
            EntryKind::File => "file",
        }
    }
}

/// Classify an entry from its base name and directory status.
///
/// This is the only classification rule in the crate; the filter and the
/// output formats all call it so they can never drift apart.
pub fn classify(name: &str, is_dir: bool) -> EntryKind {
    if is_dir {
        EntryKind::Directory
    } else if is_executable_name(name) {
        EntryKind::Executable
    } else {
        EntryKind::File
    }
}

/// Case-insensitive suffix test against the executable-extension set.
pub fn is_executable_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    EXECUTABLE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

/// Hidden follows the dot-file convention on the base name.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Decide whether one entry belongs in the result set.
///
/// Rule order, each short-circuiting:
/// 1. `hidden_only`: accept iff hidden and the pattern matches.
/// 2. `no_hidden`: hidden entries are rejected outright.
/// 3. Without `match_all`, non-directory entries must carry an executable
///    extension; directories always pass this gate.
/// 4. What remains is accepted iff the pattern matches.
pub fn accept(
    name: &str,
    is_dir: bool,
    hidden: bool,
    query: &Query,
    config: &SearchConfig,
) -> bool {
    let matched = query.matches(name);

    if config.hidden_only {
        let accepted = hidden && matched;
        if !accepted {
            debug!(target: "check", "{name}: rejected (hidden-only)");
        }
        return accepted;
    }

    if config.no_hidden && hidden {
        debug!(target: "check", "{name}: rejected (hidden)");
        return false;
    }

    if !config.match_all && !is_dir && !is_executable_name(name) {
        debug!(target: "check", "{name}: rejected (not executable)");
        return false;
    }

    if !matched {
        debug!(target: "check", "{name}: rejected (no pattern match)");
    }
    matched
}
