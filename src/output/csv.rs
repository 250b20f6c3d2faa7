//! CSV output formatting
//!
//! One header row plus one row per match, quoted per RFC 4180: fields
//! containing commas, quotes, or newlines are wrapped in double quotes with
//! embedded quotes doubled.

use std::io::{self, Write};

use crate::search::FoundEntry;

use super::utils::format_timestamp_rfc3339;

const HEADER: &str = "path,name,kind,hidden,readonly,size,modified";

/// Quote a field when its content requires it.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// One CSV row for a match.
fn format_row(entry: &FoundEntry) -> String {
    let modified = entry
        .modified
        .map(format_timestamp_rfc3339)
        .unwrap_or_default();
    format!(
        "{},{},{},{},{},{},{}",
        escape_field(&entry.path.display().to_string()),
        escape_field(&entry.name),
        entry.kind.label(),
        entry.hidden,
        entry.readonly,
        entry.size,
        escape_field(&modified)
    )
}

/// Print the result set as CSV to stdout.
pub fn print_csv(entries: &[FoundEntry]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", HEADER)?;
    for entry in entries {
        writeln!(out, "{}", format_row(entry))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::search::EntryKind;

    use super::*;

    #[test]
    fn test_plain_fields_are_not_quoted() {
        assert_eq!(escape_field("git.exe"), "git.exe");
        assert_eq!(escape_field("/usr/local/bin"), "/usr/local/bin");
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_row_layout() {
        let entry = FoundEntry {
            path: PathBuf::from("/opt/odd,dir/run.sh"),
            name: "run.sh".to_string(),
            kind: EntryKind::Executable,
            hidden: false,
            readonly: true,
            size: 42,
            modified: None,
        };
        let row = format_row(&entry);
        assert_eq!(row, "\"/opt/odd,dir/run.sh\",run.sh,executable,false,true,42,");
    }
}
