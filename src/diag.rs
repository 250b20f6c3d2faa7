//! Diagnostic trace stream gated by named debug categories
//!
//! Trace lines are ordinary `log` records whose target names the category:
//! `scan` (directory enumeration), `match` (accepted entries), `check`
//! (filter rejections), and `error` (recovered per-entry/per-directory
//! failures). Enabling a category turns on its target at debug level;
//! everything else stays off, so the hot path costs nothing when tracing is
//! disabled.

use std::io::Write;

use log::LevelFilter;

use crate::search::ConfigError;

/// The recognized debug categories, in the order help text lists them.
pub const CATEGORIES: &[&str] = &["scan", "match", "check", "error"];

/// Initialize the diagnostic logger for the requested categories.
///
/// Unknown category names are configuration errors, reported before any
/// traversal begins. Safe to call with an empty list; all tracing stays off.
pub fn init(categories: &[String]) -> Result<(), ConfigError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Off);

    for category in categories {
        let category = category.to_lowercase();
        if !CATEGORIES.contains(&category.as_str()) {
            return Err(ConfigError::UnknownDebugCategory(category));
        }
        builder.filter_module(&category, LevelFilter::Debug);
    }

    builder.format(|buf, record| writeln!(buf, "whence: [{}] {}", record.target(), record.args()));
    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
