//! Plain text frequency report writer.
//!
//! Layout:
//!
//! ```text
//!   freq  from .. to
//!      1  0001 .. 0003
//!      2  0010 .. 0010
//! ```

use crate::aggregator::FrequencyRange;
use crate::utils::config::{EMPTY_REPORT_LINE, REPORT_HEADER};
use crate::utils::error::OutputError;
use log::debug;
use std::io::Write;

/// Format one report line
///
/// **Public** - right-aligned count, then the range in lowercase hex
pub fn format_range(range: &FrequencyRange) -> String {
    format!("{:6}  {:04x} .. {:04x}", range.count, range.start, range.end)
}

/// Write the header and one line per range
///
/// **Public** - main entry point for text output
///
/// When `ranges` is empty a single zero-count line is printed under the
/// header, so an empty trace still yields a two-line table.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error on the writer
pub fn write_report<W: Write>(writer: &mut W, ranges: &[FrequencyRange]) -> Result<(), OutputError> {
    writeln!(writer, "{}", REPORT_HEADER)?;

    if ranges.is_empty() {
        debug!("No address touched, writing placeholder line");
        writeln!(writer, "{}", EMPTY_REPORT_LINE)?;
    }

    for range in ranges {
        writeln!(writer, "{}", format_range(range))?;
    }

    writer.flush()?;

    Ok(())
}

/// Render the full report into a string
///
/// **Public** - useful for tests and logging
pub fn report_to_string(ranges: &[FrequencyRange]) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, ranges)?;

    // Only ASCII is ever written
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
