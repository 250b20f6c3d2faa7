//! Search core: pattern compilation, filtering, traversal, collection
//!
//! Control flow: a raw query compiles into a [`Query`], the
//! [`SearchWalker`] enumerates directories (one level per PATH root, or
//! whole subtrees in global mode) applying the filter policy per entry, and
//! accepted entries become [`FoundEntry`] records ready for sorting and
//! rendering.

mod config;
mod filter;
mod pattern;
mod results;
mod walker;

pub use config::{ConfigError, SearchConfig};
pub use filter::{
    EXECUTABLE_EXTENSIONS, EntryKind, accept, classify, is_executable_name, is_hidden_name,
};
pub use pattern::{PatternKind, Query, glob_to_regex};
pub use results::{FoundEntry, SortKey, sort_entries};
pub use walker::SearchWalker;
