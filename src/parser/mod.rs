//! Trace line parsing.
//!
//! This module handles:
//! - Locating the `PC=XXXX: BB BB BB` fragment in each trace line
//! - Decoding the instruction address and operand byte presence
//! - Rejecting malformed lines

pub mod trace_line;

// Re-export main types
pub use trace_line::{parse_line, parse_trace, TraceLine};
