//! Whence - locate files by name on PATH or across whole volumes

pub mod diag;
pub mod output;
pub mod search;

pub use output::{OutputConfig, OutputFormat, print_csv, print_json, print_long, print_plain};
pub use search::{
    ConfigError, EntryKind, FoundEntry, PatternKind, Query, SearchConfig, SearchWalker, SortKey,
    sort_entries,
};
