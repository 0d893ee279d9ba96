//! Trace Freq
//!
//! Address frequency reports for atari800 execution traces.
//!
//! Every trace line names the address of an executed instruction and its
//! opcode/operand bytes. The library counts how often each address was
//! touched and folds the counts into ranges of consecutive addresses that
//! share a frequency, least frequent first.
//!
//! ## Getting Started
//!
//! ```bash
//! atari800 -trace ... | trace-freq
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
