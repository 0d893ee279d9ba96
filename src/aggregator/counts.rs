//! Per-address touch counts.
//!
//! The table has one slot for every address of the 16-bit address space.
//! Slots start at zero and only ever grow while a trace is accumulated.

use crate::parser::TraceLine;
use crate::utils::config::ADDRESS_SPACE;
use crate::utils::error::CountError;
use log::debug;

/// An address with a non-zero touch count
///
/// **Public** - input of the range reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressHit {
    pub address: u16,
    pub count: u64,
}

/// Fixed-size touch count table covering the whole address space
#[derive(Debug, Clone)]
pub struct CountTable {
    counts: Box<[u64]>,
}

impl Default for CountTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CountTable {
    /// Create a zeroed table
    pub fn new() -> Self {
        Self {
            counts: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }

    /// Build a table from parsed lines
    ///
    /// **Public** - convenience wrapper around `accumulate`
    pub fn from_lines(lines: &[TraceLine]) -> Result<Self, CountError> {
        let mut table = Self::new();
        table.accumulate(lines)?;
        Ok(table)
    }

    /// Record one executed instruction
    ///
    /// **Public** - main entry point for accumulation
    ///
    /// Touches the PC, then PC+1 and PC+2 when the matching operand byte is
    /// present.
    ///
    /// # Errors
    /// * `CountError::AddressOverflow` - an operand byte lies past 0xFFFF.
    ///   The table is left unchanged for that line.
    pub fn record(&mut self, line: &TraceLine) -> Result<(), CountError> {
        if let Some(address) = line
            .touched_addresses()
            .find(|&address| address as usize >= ADDRESS_SPACE)
        {
            return Err(CountError::AddressOverflow {
                line_number: line.line_number,
                pc: line.pc,
                address,
            });
        }

        for address in line.touched_addresses() {
            self.counts[address as usize] += 1;
        }

        Ok(())
    }

    /// Record every line in order, stopping at the first overflow
    pub fn accumulate(&mut self, lines: &[TraceLine]) -> Result<(), CountError> {
        for line in lines {
            self.record(line)?;
        }

        debug!(
            "Accumulated {} lines into {} distinct addresses",
            lines.len(),
            self.distinct_addresses()
        );

        Ok(())
    }

    /// Touch count of a single address
    pub fn get(&self, address: u16) -> u64 {
        self.counts[usize::from(address)]
    }

    /// Number of slots (always the full address space)
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no address has been touched yet
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Addresses with a non-zero count, in ascending address order
    pub fn hits(&self) -> impl Iterator<Item = AddressHit> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(address, &count)| AddressHit {
                address: address as u16,
                count,
            })
    }

    /// Sum of all counts
    pub fn total_touches(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of addresses touched at least once
    pub fn distinct_addresses(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pc: u16, second_byte: bool, third_byte: bool) -> TraceLine {
        TraceLine {
            line_number: 1,
            pc,
            second_byte,
            third_byte,
        }
    }

    #[test]
    fn test_new_table_is_zeroed() {
        let table = CountTable::new();

        assert_eq!(table.len(), ADDRESS_SPACE);
        assert!(table.is_empty());
        assert_eq!(table.hits().count(), 0);
    }

    #[test]
    fn test_record_operand_bytes() {
        let mut table = CountTable::new();
        table.record(&line(0x10, true, false)).unwrap();

        assert_eq!(table.get(0x10), 1);
        assert_eq!(table.get(0x11), 1);
        assert_eq!(table.get(0x12), 0);
    }

    #[test]
    fn test_record_third_byte_without_second() {
        let mut table = CountTable::new();
        table.record(&line(0x10, false, true)).unwrap();

        assert_eq!(table.get(0x11), 0);
        assert_eq!(table.get(0x12), 1);
    }

    #[test]
    fn test_record_top_of_address_space() {
        let mut table = CountTable::new();
        table.record(&line(0xFFFE, true, false)).unwrap();
        table.record(&line(0xFFFF, false, false)).unwrap();

        assert_eq!(table.get(0xFFFE), 1);
        assert_eq!(table.get(0xFFFF), 2);
    }

    #[test]
    fn test_record_overflow_leaves_table_untouched() {
        let mut table = CountTable::new();
        let err = table.record(&line(0xFFFE, true, true)).unwrap_err();

        match err {
            CountError::AddressOverflow { pc, address, .. } => {
                assert_eq!(pc, 0xFFFE);
                assert_eq!(address, 0x10000);
            }
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_hits_ascending() {
        let mut table = CountTable::new();
        table.record(&line(0x30, false, false)).unwrap();
        table.record(&line(0x05, true, false)).unwrap();

        let addresses: Vec<u16> = table.hits().map(|hit| hit.address).collect();
        assert_eq!(addresses, vec![0x05, 0x06, 0x30]);
        assert_eq!(table.total_touches(), 3);
        assert_eq!(table.distinct_addresses(), 3);
    }
}
