//! The replay driver.
//!
//! [`Simulator`] processes one trace entry at a time: bump the access
//! counter (logical time is the 1-based counter value), translate the
//! address, classify hit or fault, delegate to the configured policy, and
//! mark the page dirty after a write once residency is established. The
//! whole run is strictly sequential; for OPT the future-use index is built
//! by a pre-scan inside [`Simulator::new`] before the replay pass.

use std::fmt;
use std::path::Path;

use tracing::trace;

use crate::config::{Algorithm, Config};
use crate::core::page::{ResidencyTable, page_number};
use crate::core::policies::{self, Policy};
use crate::error::{ConfigError, InvariantViolation, SimError};
use crate::stats::{Report, SimStats};
use crate::trace::{Trace, TraceEntry};

/// A configured replay over one trace.
pub struct Simulator {
    algorithm: Algorithm,
    table: ResidencyTable,
    policy: Box<dyn Policy>,
    stats: SimStats,
}

impl Simulator {
    /// Builds the tables and the configured policy.
    ///
    /// For OPT this pre-scans `trace` to build the future-use index; the
    /// replay then starts from the beginning of the same entries.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(config: &Config, trace: &Trace) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = policies::select(config, trace)?;
        Ok(Self {
            algorithm: config.algorithm,
            table: ResidencyTable::new(config.frames),
            policy,
            stats: SimStats::default(),
        })
    }

    /// Processes a single reference.
    ///
    /// # Errors
    ///
    /// Propagates any [`InvariantViolation`] observed by the tables or the
    /// policy; the simulation must not continue past one.
    pub fn step(&mut self, entry: TraceEntry) -> Result<(), InvariantViolation> {
        self.stats.accesses += 1;
        let now = self.stats.accesses;
        let page = page_number(entry.addr);

        if self.table.is_resident(page) {
            trace!(page, now, "hit");
            self.policy.on_hit(&mut self.table, page, now)?;
        } else {
            self.stats.faults += 1;
            trace!(page, now, "page fault");
            self.policy.on_fault(&mut self.table, page, now)?;
        }

        if entry.write {
            self.table.set_dirty(page);
        }
        Ok(())
    }

    /// Replays every entry of the trace and returns the final report.
    ///
    /// # Errors
    ///
    /// Propagates the first [`InvariantViolation`] observed, if any.
    pub fn run(&mut self, trace: &Trace) -> Result<Report, InvariantViolation> {
        for &entry in trace.entries() {
            self.step(entry)?;
        }
        Ok(self.report())
    }

    /// Snapshot of the counters in report form.
    pub fn report(&self) -> Report {
        Report {
            algorithm: self.algorithm.name(),
            frames: self.table.frame_count(),
            accesses: self.stats.accesses,
            faults: self.stats.faults,
            writebacks: self.table.writebacks(),
        }
    }

    /// The page/frame tables, for inspection.
    pub const fn table(&self) -> &ResidencyTable {
        &self.table
    }

    /// The running counters.
    pub const fn stats(&self) -> SimStats {
        self.stats
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("algorithm", &self.algorithm)
            .field("frames", &self.table.frame_count())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// One-shot run: load a trace file, replay it, report.
///
/// # Errors
///
/// Returns a [`SimError`] for a rejected configuration, an unreadable trace
/// source, or an invariant violation during replay.
pub fn run_trace_file(config: &Config, path: impl AsRef<Path>) -> Result<Report, SimError> {
    let trace = Trace::load(path)?;
    let mut simulator = Simulator::new(config, &trace)?;
    Ok(simulator.run(&trace)?)
}
