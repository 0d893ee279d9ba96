//! Parser for single atari800 trace lines.
//!
//! Each line describes one executed instruction and contains the fragment
//! `PC=XXXX: BB BB BB` somewhere in it:
//!
//! ```text
//! 47 PC=E477: A9 00    LDA #$00
//! ```
//!
//! `XXXX` is the instruction address, the `BB` fields are the opcode and up
//! to two operand bytes. Unused operand fields are left blank.

use crate::utils::config::PC_MARKER;
use crate::utils::error::ParseError;
use log::debug;

/// Width of `XXXX: BB BB BB` following the `PC=` marker
const FIELDS_LEN: usize = 14;

/// One parsed trace line
///
/// **Public** - consumed by the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine {
    /// 1-based position of the line in the input
    pub line_number: usize,

    /// Address of the executed instruction
    pub pc: u16,

    /// Second byte field (first operand) was present
    pub second_byte: bool,

    /// Third byte field (second operand) was present
    pub third_byte: bool,
}

impl TraceLine {
    /// Addresses touched by this instruction: the PC, then PC+1 and PC+2
    /// for each operand byte present
    ///
    /// Values are widened to `u32` so offsets past 0xFFFF stay visible to
    /// the caller instead of wrapping.
    pub fn touched_addresses(&self) -> impl Iterator<Item = u32> {
        let base = u32::from(self.pc);
        [
            Some(base),
            self.second_byte.then_some(base + 1),
            self.third_byte.then_some(base + 2),
        ]
        .into_iter()
        .flatten()
    }

    /// Number of bytes (1..=3) this instruction occupies in the trace
    pub fn byte_count(&self) -> usize {
        1 + usize::from(self.second_byte) + usize::from(self.third_byte)
    }
}

/// Parse one trace line
///
/// **Public** - main entry point for line parsing
///
/// # Arguments
/// * `line_number` - 1-based line number, reported back on failure
/// * `line` - Raw line text without its terminator
///
/// # Errors
/// * `ParseError::MalformedLine` - no `PC=XXXX: BB BB BB` fragment found
pub fn parse_line(line_number: usize, line: &str) -> Result<TraceLine, ParseError> {
    // Rightmost marker wins when a line mentions PC= more than once
    line.rmatch_indices(PC_MARKER)
        .find_map(|(index, marker)| match_fields(&line.as_bytes()[index + marker.len()..]))
        .map(|(pc, second_byte, third_byte)| TraceLine {
            line_number,
            pc,
            second_byte,
            third_byte,
        })
        .ok_or_else(|| ParseError::MalformedLine {
            line_number,
            line: line.to_string(),
        })
}

/// Parse a whole trace, one instruction per line
///
/// **Public** - used by the analyze command
///
/// Stops at the first malformed line.
pub fn parse_trace(input: &str) -> Result<Vec<TraceLine>, ParseError> {
    let lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Parsed {} trace lines", lines.len());

    Ok(lines)
}

/// Match `XXXX: BB BB BB` at the start of `rest`
///
/// **Private** - returns (pc, second byte present, third byte present)
fn match_fields(rest: &[u8]) -> Option<(u16, bool, bool)> {
    let fields = rest.get(..FIELDS_LEN)?;

    let pc = parse_hex_u16(&fields[0..4])?;
    if &fields[4..6] != b": " || fields[8] != b' ' || fields[11] != b' ' {
        return None;
    }

    // Opcode presence is irrelevant but its shape must still match
    byte_field(&fields[6..8])?;
    let second_byte = byte_field(&fields[9..11])?;
    let third_byte = byte_field(&fields[12..14])?;

    Some((pc, second_byte, third_byte))
}

/// Classify a two character byte field
///
/// **Private** - `Some(true)` for two hex digits, `Some(false)` when blank
fn byte_field(field: &[u8]) -> Option<bool> {
    if field.iter().all(u8::is_ascii_hexdigit) {
        Some(true)
    } else if field.iter().all(u8::is_ascii_whitespace) {
        Some(false)
    } else {
        None
    }
}

/// Parse exactly four hex digits
///
/// **Private** - rejects signs and other characters `from_str_radix` would allow
fn parse_hex_u16(digits: &[u8]) -> Option<u16> {
    digits.iter().try_fold(0u16, |acc, &digit| {
        let value = char::from(digit).to_digit(16)?;
        Some((acc << 4) | value as u16)
    })
}
