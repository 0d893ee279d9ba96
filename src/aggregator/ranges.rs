//! Merge address hits into frequency ranges.
//!
//! Hits are ordered by (count, address), then consecutive addresses that
//! share a count are folded into a single range. Contiguity is checked on
//! raw address values, so `0x10..0x12` with count 3 stays one range even if
//! other hits with count 3 sort before it.

use super::counts::{AddressHit, CountTable};
use log::debug;

/// A maximal run of consecutive addresses with the same touch count
///
/// **Public** - rendered by the text report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRange {
    /// First address of the run
    pub start: u16,

    /// Last address of the run (inclusive)
    pub end: u16,

    /// Touch count shared by every address in the run
    pub count: u64,
}

impl FrequencyRange {
    /// Single-address range
    pub fn new(address: u16, count: u64) -> Self {
        Self {
            start: address,
            end: address,
            count,
        }
    }

    /// Number of addresses covered
    pub fn span(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    /// Whether `hit` directly extends this range
    fn continues_with(&self, hit: &AddressHit) -> bool {
        hit.count == self.count && u32::from(hit.address) == u32::from(self.end) + 1
    }
}

/// Order hits by count ascending, then address ascending
///
/// **Public** - the sort stage of the reporter
pub fn sort_hits(hits: &mut [AddressHit]) {
    // Addresses are unique, so the key is a total order
    hits.sort_unstable_by_key(|hit| (hit.count, hit.address));
}

/// Fold sorted hits into ranges
///
/// **Public** - the merge stage of the reporter
///
/// # Arguments
/// * `hits` - Hits already ordered by `sort_hits`
///
/// # Returns
/// Ranges in the same (count, start) order. Empty input gives no ranges.
pub fn merge_ranges(hits: &[AddressHit]) -> Vec<FrequencyRange> {
    let mut ranges = Vec::new();
    let mut current: Option<FrequencyRange> = None;

    for hit in hits {
        if let Some(range) = current.as_mut().filter(|range| range.continues_with(hit)) {
            range.end = hit.address;
            continue;
        }

        ranges.extend(current.replace(FrequencyRange::new(hit.address, hit.count)));
    }

    ranges.extend(current);
    ranges
}

/// Filter, sort and merge a count table into ranges
///
/// **Public** - main entry point for range building
pub fn build_ranges(table: &CountTable) -> Vec<FrequencyRange> {
    let mut hits: Vec<AddressHit> = table.hits().collect();
    sort_hits(&mut hits);

    let ranges = merge_ranges(&hits);

    debug!("Merged {} hits into {} ranges", hits.len(), ranges.len());

    ranges
}
