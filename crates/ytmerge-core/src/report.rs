//! Plain-text report of merged entries
//!
//! One line per entry: `"<title>", "<published_at>", "<video_id>"`.
//! Fields are wrapped in quotes but never escaped, so a title that
//! contains `"` produces a line that is not valid CSV.

use std::io::Write;

use crate::error::Result;
use crate::types::Entry;

/// Formats a single report line (without the newline)
pub fn format_line(entry: &Entry) -> String {
    format!(
        "\"{}\", \"{}\", \"{}\"",
        entry.title, entry.published_at, entry.video_id
    )
}

/// Writes one line per entry, in the given order
///
/// Returns the number of lines written.
pub fn write_report<W: Write>(writer: &mut W, entries: &[Entry]) -> Result<usize> {
    for entry in entries {
        writeln!(writer, "{}", format_line(entry))?;
    }
    writer.flush()?;
    Ok(entries.len())
}
