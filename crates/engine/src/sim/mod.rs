//! Replay driving.
//!
//! Ties the tables, the selected policy, and the counters together into a
//! single-threaded batch replay over a loaded trace.

/// The per-reference orchestration and the one-shot entry point.
pub mod simulator;

pub use simulator::{Simulator, run_trace_file};
