//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads the whole trace and parses every line
//! 2. Accumulates per-address touch counts
//! 3. Sorts and merges the counts into ranges, then prints the report

use crate::aggregator::{build_ranges, CountTable, FrequencyRange};
use crate::output::write_report;
use crate::parser::parse_trace;
use crate::utils::config::{PROGRESS_READING, PROGRESS_RESULT, PROGRESS_SORTING};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{Read, Write};
use std::time::Instant;

/// Outcome of a successful analysis
///
/// **Public** - returned to main.rs and tests
#[derive(Debug, Clone, Default)]
pub struct AnalyzeSummary {
    /// Number of trace lines parsed
    pub lines: usize,

    /// Number of addresses touched at least once
    pub distinct_addresses: usize,

    /// Sum of all touch counts
    pub total_touches: u64,

    /// Ranges in report order
    pub ranges: Vec<FrequencyRange>,
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `input` - Trace source, read to the end before processing
/// * `output` - Receives progress lines and the report
///
/// # Errors
/// * Unreadable or non UTF-8 input
/// * A malformed trace line
/// * An operand byte past the end of the address space
/// * Write failures on `output`
///
/// No report line is written unless the whole trace was accepted.
///
/// # Example
/// ```ignore
/// let stdout = std::io::stdout();
/// execute_analyze(std::io::stdin().lock(), &mut stdout.lock())?;
/// ```
pub fn execute_analyze<R: Read, W: Write>(mut input: R, output: &mut W) -> Result<AnalyzeSummary> {
    let start_time = Instant::now();

    // Step 1: Read and parse the trace
    writeln!(output, "{}", PROGRESS_READING).context("Failed to write progress")?;
    debug!("Step 1/3: Reading trace...");

    let mut raw_trace = String::new();
    input
        .read_to_string(&mut raw_trace)
        .context("Failed to read trace input")?;

    debug!("Read {} bytes of trace", raw_trace.len());

    let lines = parse_trace(&raw_trace).context("Failed to parse trace")?;

    // Step 2: Count touches
    debug!("Step 2/3: Accumulating {} lines...", lines.len());
    let table = CountTable::from_lines(&lines).context("Failed to accumulate address counts")?;

    // Step 3: Sort, merge and print
    writeln!(output, "{}", PROGRESS_SORTING).context("Failed to write progress")?;
    debug!("Step 3/3: Building frequency ranges...");
    let ranges = build_ranges(&table);

    writeln!(output, "{}", PROGRESS_RESULT).context("Failed to write progress")?;
    write_report(output, &ranges).context("Failed to write frequency report")?;

    let summary = AnalyzeSummary {
        lines: lines.len(),
        distinct_addresses: table.distinct_addresses(),
        total_touches: table.total_touches(),
        ranges,
    };

    info!(
        "Analyzed {} lines: {} addresses, {} touches, {} ranges in {:.2}s",
        summary.lines,
        summary.distinct_addresses,
        summary.total_touches,
        summary.ranges.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (Result<AnalyzeSummary>, String) {
        let mut output = Vec::new();
        let result = execute_analyze(input.as_bytes(), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_analyze_repeated_line() {
        let (result, output) = run("PC=0001: EA      \nPC=0001: EA      \n");

        let summary = result.unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.ranges, vec![FrequencyRange::new(1, 2)]);
        assert!(output.ends_with("  freq  from .. to\n     2  0001 .. 0001\n"));
    }

    #[test]
    fn test_analyze_progress_order() {
        let (_, output) = run("");

        assert_eq!(
            output,
            "Reading trace\nSorting\nResult\n  freq  from .. to\n     0  0000 .. 0000\n"
        );
    }

    #[test]
    fn test_analyze_malformed_line_prints_no_ranges() {
        let (result, output) = run("PC=0001: EA      \nPC=0002 EA      \n");

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("PC=0002 EA"));
        assert_eq!(output, "Reading trace\n");
    }

    #[test]
    fn test_analyze_overflow_is_fatal() {
        let (result, output) = run("PC=FFFF: 20 00 C0\n");

        assert!(format!("{:#}", result.unwrap_err()).contains("line 1"));
        assert!(!output.contains("freq"));
    }
}
