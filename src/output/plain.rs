//! Plain listing: one colored path per line

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::search::{EntryKind, FoundEntry};

use super::config::OutputConfig;

/// Color used for an entry of the given kind.
fn kind_color(kind: EntryKind) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match kind {
        EntryKind::Directory => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
        }
        EntryKind::Executable => {
            spec.set_fg(Some(Color::Green));
        }
        EntryKind::File => {
            spec.set_fg(Some(Color::White));
        }
    }
    spec
}

/// Print one matched path per line, colored by entry kind.
pub fn print_plain(entries: &[FoundEntry], config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for entry in entries {
        stdout.set_color(&kind_color(entry.kind))?;
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
