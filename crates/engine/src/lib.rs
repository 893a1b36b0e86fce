//! Trace-driven virtual-memory page-replacement simulator.
//!
//! This crate replays a memory reference trace against a fixed-size simulated
//! physical memory and measures the cost of four replacement policies:
//! 1. **OPT:** Belady's clairvoyant optimum, driven by precomputed future-use queues.
//! 2. **CLOCK:** second-chance FIFO approximation with a persistent hand.
//! 3. **AGING:** decaying 8-bit reference counters, refreshed on a fixed interval.
//! 4. **WORKING_SET_CLOCK:** clock sweep restricted by a working-set window.
//!
//! A run is three steps: load a trace with [`Trace::load`], build a
//! [`Simulator`] from a validated [`Config`], and call [`Simulator::run`] to
//! obtain a [`Report`] of accesses, faults, and write-backs.

/// Simulator configuration (frame count, algorithm selection, policy parameters).
pub mod config;
/// Page table, inverted frame table, future-use index, and the replacement policies.
pub mod core;
/// Typed errors: configuration, trace I/O, and internal invariant violations.
pub mod error;
/// Replay driver: per-reference orchestration over a loaded trace.
pub mod sim;
/// Access, fault, and write-back counters and the fixed-order report.
pub mod stats;
/// Trace file reader and tokenizer.
pub mod trace;

/// Replacement algorithm selector; parses from `opt`, `clock`, `aging`, `work`.
pub use crate::config::Algorithm;
/// Run configuration; call [`Config::validate`] before building a simulator.
pub use crate::config::Config;
/// Top-level error type returned by the one-shot entry points.
pub use crate::error::SimError;
/// Replay driver; construct with [`Simulator::new`].
pub use crate::sim::Simulator;
/// Fixed-order result summary; printable with `Display`.
pub use crate::stats::Report;
/// Loaded memory reference trace.
pub use crate::trace::Trace;
