//! Simulation statistics collection and reporting.
//!
//! [`SimStats`] tracks the running counters during replay; [`Report`] is
//! the fixed-order summary handed to the presentation layer once the trace
//! is consumed: algorithm name, frame count, total accesses, total faults,
//! total write-backs.

use std::fmt;

/// Running counters updated once per trace entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total references processed, hits and faults alike.
    pub accesses: u64,
    /// References that found their page not resident.
    pub faults: u64,
}

/// Final summary of one run, printable one field per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Canonical algorithm name.
    pub algorithm: &'static str,
    /// Physical frame count of the run.
    pub frames: usize,
    /// Total memory accesses replayed.
    pub accesses: u64,
    /// Total page faults taken.
    pub faults: u64,
    /// Total write-backs of dirty victims.
    pub writebacks: u64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Number of frames: {}", self.frames)?;
        writeln!(f, "Total memory accesses: {}", self.accesses)?;
        writeln!(f, "Total page faults: {}", self.faults)?;
        write!(f, "Total writes to disk: {}", self.writebacks)
    }
}
