//! JSON output formatting
//!
//! Serialization uses dedicated record types rather than deriving on the
//! core `FoundEntry`, so the wire shape can stay stable independently of
//! the search internals.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::search::FoundEntry;

use super::utils::format_timestamp_rfc3339;

/// Serializable view of one match.
#[derive(Debug, Serialize)]
pub struct JsonEntry<'a> {
    pub path: &'a Path,
    pub name: &'a str,
    pub kind: &'static str,
    pub hidden: bool,
    pub readonly: bool,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

impl<'a> From<&'a FoundEntry> for JsonEntry<'a> {
    fn from(entry: &'a FoundEntry) -> Self {
        Self {
            path: &entry.path,
            name: &entry.name,
            kind: entry.kind.label(),
            hidden: entry.hidden,
            readonly: entry.readonly,
            size: entry.size,
            modified: entry.modified.map(format_timestamp_rfc3339),
        }
    }
}

/// The complete JSON document: match count plus the matches themselves.
#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    pub count: usize,
    pub matches: Vec<JsonEntry<'a>>,
}

impl<'a> JsonDocument<'a> {
    pub fn new(entries: &'a [FoundEntry]) -> Self {
        Self {
            count: entries.len(),
            matches: entries.iter().map(JsonEntry::from).collect(),
        }
    }
}

/// Print the result set as pretty-printed JSON to stdout.
pub fn print_json(entries: &[FoundEntry]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&JsonDocument::new(entries))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
