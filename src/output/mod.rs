//! Output writers for frequency reports.
//!
//! The only supported format is the fixed-width text table.

pub mod text;

// Re-export main functions
pub use text::{format_range, report_to_string, write_report};
