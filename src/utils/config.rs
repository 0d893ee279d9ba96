//! Configuration and constants for the CLI.

/// Number of addressable slots in the traced CPU (16-bit address bus)
pub const ADDRESS_SPACE: usize = 65_536;

/// Marker that precedes the program counter field in a trace line
pub const PC_MARKER: &str = "PC=";

// Progress messages printed to stdout between pipeline stages
pub const PROGRESS_READING: &str = "Reading trace";
pub const PROGRESS_SORTING: &str = "Sorting";
pub const PROGRESS_RESULT: &str = "Result";

/// Header line of the frequency table
pub const REPORT_HEADER: &str = "  freq  from .. to";

/// Line printed when no address was touched at all
pub const EMPTY_REPORT_LINE: &str = "     0  0000 .. 0000";
