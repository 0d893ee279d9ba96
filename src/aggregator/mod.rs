//! Aggregation of parsed trace lines into address frequencies.
//!
//! This module transforms parsed trace lines into:
//! - A per-address touch count table
//! - Frequency ranges of consecutive addresses sharing a count

pub mod counts;
pub mod ranges;

// Re-export main types and functions
pub use counts::{AddressHit, CountTable};
pub use ranges::{build_ranges, merge_ranges, sort_hits, FrequencyRange};
