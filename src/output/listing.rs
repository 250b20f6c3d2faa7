//! Long listing: attributes, human-readable size, timestamp, path

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::search::{EntryKind, FoundEntry};

use super::config::OutputConfig;
use super::utils::{format_size, format_timestamp};

/// Compact attribute string: kind, hidden flag, readonly flag.
///
/// `d`/`x`/`-` for directory/executable/file, then `h` or `-`, then `r`
/// or `-`. Recomputed from the record's classification, never re-derived
/// from the filesystem.
pub fn attribute_string(entry: &FoundEntry) -> String {
    let kind = match entry.kind {
        EntryKind::Directory => 'd',
        EntryKind::Executable => 'x',
        EntryKind::File => '-',
    };
    let hidden = if entry.hidden { 'h' } else { '-' };
    let readonly = if entry.readonly { 'r' } else { '-' };
    [kind, hidden, readonly].iter().collect()
}

/// One formatted long-listing line, without color.
pub fn format_long_entry(entry: &FoundEntry) -> String {
    format!(
        "{}  {:>8}  {}  {}",
        attribute_string(entry),
        format_size(entry.size),
        format_timestamp(entry.modified),
        entry.path.display()
    )
}

/// Print the long listing, coloring the path portion by kind.
pub fn print_long(entries: &[FoundEntry], config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for entry in entries {
        write!(
            stdout,
            "{}  {:>8}  {}  ",
            attribute_string(entry),
            format_size(entry.size),
            format_timestamp(entry.modified)
        )?;
        let mut spec = ColorSpec::new();
        match entry.kind {
            EntryKind::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
            EntryKind::Executable => spec.set_fg(Some(Color::Green)),
            EntryKind::File => spec.set_fg(Some(Color::White)),
        };
        stdout.set_color(&spec)?;
        write!(stdout, "{}", entry.path.display())?;
        stdout.reset()?;
        writeln!(stdout)?;
    }

    if config.show_summary {
        writeln!(stdout)?;
        writeln!(stdout, "{} matches", entries.len())?;
    }
    Ok(())
}
