//! CLI entry point for whence

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::{Parser, ValueEnum};
use log::debug;
use whence::{
    OutputConfig, OutputFormat, Query, SearchConfig, SearchWalker, SortKey, diag, print_csv,
    print_json, print_long, print_plain, sort_entries,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

/// Sort key for the result set
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortField {
    /// Ascending byte size
    Size,
    /// Ascending modification time
    Time,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Size => SortKey::Size,
            SortField::Time => SortKey::Time,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "whence")]
#[command(about = "Locate files by name on PATH or across whole volumes")]
#[command(version)]
struct Args {
    /// Name or glob pattern to look for (bare names get a wildcard
    /// extension appended, so `git` also finds `git.exe` and `git.sh`)
    query: String,

    /// Interpret the query as a regular expression
    #[arg(long = "regex")]
    regex: bool,

    /// Search whole volumes recursively instead of the PATH directories;
    /// defaults to the current volume's root when no ROOT is given
    #[arg(short = 'g', long = "global", value_name = "ROOT", num_args = 0..)]
    global: Option<Vec<PathBuf>>,

    /// Match any file, not just executables
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Only show hidden files and directories
    #[arg(short = 'H', long = "hidden-only", conflicts_with = "no_hidden")]
    hidden_only: bool,

    /// Skip hidden files and directories
    #[arg(short = 'n', long = "no-hidden")]
    no_hidden: bool,

    /// Stop after the first match
    #[arg(short = '1', long = "first")]
    first: bool,

    /// Match bare names exactly (no automatic extension wildcard)
    #[arg(short = 'e', long = "exact")]
    exact: bool,

    /// Sort matches by the given key
    #[arg(short = 's', long = "sort", value_name = "KEY")]
    sort: Option<SortField>,

    /// Reverse the output order (applied after any sort)
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Long listing: attributes, size, modification time
    #[arg(short = 'l', long = "long", conflicts_with_all = ["json", "csv"])]
    long: bool,

    /// Output matches as JSON
    #[arg(long = "json", conflicts_with = "csv")]
    json: bool,

    /// Output matches as CSV
    #[arg(long = "csv")]
    csv: bool,

    /// Append a match-count summary line
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Descend only N levels deep in global mode
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Skip entries matching pattern (can be used multiple times);
    /// a skipped directory's whole subtree is skipped
    #[arg(short = 'X', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Only show files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only show files modified longer than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable debug trace categories: scan, match, check, error
    #[arg(long = "debug", value_name = "CATEGORY", value_delimiter = ',')]
    debug: Vec<String>,
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Turn an `--newer`/`--older` duration flag into an absolute bound.
fn time_bound(flag: &str, value: Option<&String>) -> Option<SystemTime> {
    value.map(|s| {
        let duration = parse_duration_string(s).unwrap_or_else(|e| {
            eprintln!("whence: invalid {} duration '{}': {}", flag, s, e);
            process::exit(2);
        });
        SystemTime::now() - duration
    })
}

/// Directories named by the PATH environment variable, in order.
fn path_directories() -> Vec<PathBuf> {
    match std::env::var_os("PATH") {
        Some(path) => std::env::split_paths(&path).collect(),
        None => Vec::new(),
    }
}

/// Root of the volume holding the current directory.
#[cfg(windows)]
fn default_volume_root() -> PathBuf {
    use std::path::Component;

    if let Ok(dir) = std::env::current_dir() {
        if let Some(Component::Prefix(prefix)) = dir.components().next() {
            let mut root = prefix.as_os_str().to_os_string();
            root.push("\\");
            return PathBuf::from(root);
        }
    }
    PathBuf::from("C:\\")
}

#[cfg(not(windows))]
fn default_volume_root() -> PathBuf {
    PathBuf::from("/")
}

/// Expand a bare drive letter like `C` to `C:\`.
#[cfg(windows)]
fn normalize_root(root: PathBuf) -> PathBuf {
    let s = root.to_string_lossy();
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            PathBuf::from(format!("{}:\\", letter))
        }
        _ => root,
    }
}

#[cfg(not(windows))]
fn normalize_root(root: PathBuf) -> PathBuf {
    root
}

fn main() {
    let args = Args::parse();

    if let Err(e) = diag::init(&args.debug) {
        eprintln!("whence: {}", e);
        process::exit(2);
    }

    // Compile the query up front; an invalid pattern must fail before any
    // traversal starts.
    let query = if args.regex {
        Query::regex(&args.query)
    } else {
        Query::compile(&args.query, !args.exact)
    };
    let query = query.unwrap_or_else(|e| {
        eprintln!("whence: {}", e);
        process::exit(2);
    });
    debug!(target: "check", "query '{}' compiled as {:?}", query.raw(), query.kind());

    let config = SearchConfig {
        match_all: args.all,
        hidden_only: args.hidden_only,
        no_hidden: args.no_hidden,
        first_match: args.first,
        max_depth: args.level,
        exclude_patterns: args.exclude.clone(),
        newer_than: time_bound("--newer", args.newer.as_ref()),
        older_than: time_bound("--older", args.older.as_ref()),
    };
    if let Err(e) = config.validate() {
        eprintln!("whence: {}", e);
        process::exit(2);
    }

    let walker = SearchWalker::new(&query, &config);
    let mut entries = match &args.global {
        Some(roots) => {
            let roots: Vec<PathBuf> = if roots.is_empty() {
                vec![default_volume_root()]
            } else {
                roots.iter().cloned().map(normalize_root).collect()
            };
            walker.search_global(&roots)
        }
        None => walker.search_path(&path_directories()),
    };

    sort_entries(&mut entries, args.sort.map(SortKey::from), args.reverse);

    let format = if args.json {
        OutputFormat::Json
    } else if args.csv {
        OutputFormat::Csv
    } else if args.long {
        OutputFormat::Long
    } else {
        OutputFormat::Plain
    };
    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        format,
        show_summary: args.count,
    };

    let result = match output_config.format {
        OutputFormat::Json => print_json(&entries),
        OutputFormat::Csv => print_csv(&entries),
        OutputFormat::Long => print_long(&entries, &output_config),
        OutputFormat::Plain => print_plain(&entries, &output_config),
    };
    if let Err(e) = result {
        eprintln!("whence: error writing output: {}", e);
        process::exit(1);
    }

    // Like `which`: no matches is a reportable failure.
    if entries.is_empty() {
        process::exit(1);
    }
}
