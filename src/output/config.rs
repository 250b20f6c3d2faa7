//! Output configuration types

/// How the result set is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One colored path per line.
    #[default]
    Plain,
    /// Attribute string, human size, timestamp, path.
    Long,
    Json,
    Csv,
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub format: OutputFormat,
    /// Append a match-count summary line after plain or long output.
    pub show_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            format: OutputFormat::Plain,
            show_summary: false,
        }
    }
}
