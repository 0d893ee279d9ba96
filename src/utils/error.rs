//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during trace parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Couldn't match line {line_number}: {line}")]
    MalformedLine { line_number: usize, line: String },
}

/// Errors that can occur while accumulating address counts
#[derive(Error, Debug)]
pub enum CountError {
    #[error("PC={pc:04x} on line {line_number} touches address {address:#x}, outside the 64K address space")]
    AddressOverflow {
        line_number: usize,
        pc: u16,
        address: u32,
    },
}

/// Errors that can occur while writing the report
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),
}
