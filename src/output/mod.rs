//! Result rendering
//!
//! Four formats over the same `FoundEntry` records:
//!
//! - `plain` - one colored path per line
//! - `listing` - long listing with attributes, size, and timestamp
//! - `json` - machine-readable document with a match count
//! - `csv` - header plus one quoted row per match
//!
//! Classification labels and sizes come straight from the records; nothing
//! here re-inspects the filesystem.

mod config;
mod csv;
mod json;
mod listing;
mod plain;
mod utils;

pub use config::{OutputConfig, OutputFormat};
pub use csv::print_csv;
pub use json::{JsonDocument, JsonEntry, print_json};
pub use listing::{attribute_string, format_long_entry, print_long};
pub use plain::print_plain;
pub use utils::{format_size, format_timestamp};
