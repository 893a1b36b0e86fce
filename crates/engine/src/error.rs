//! Error types for the simulator.
//!
//! The taxonomy separates three failure classes:
//! 1. **Configuration errors:** missing or inconsistent parameters, detected
//!    before any replay starts.
//! 2. **Trace errors:** an unreadable trace source. Malformed entries are not
//!    errors; the reader stops at the first one and keeps the parsed prefix.
//! 3. **Invariant violations:** defects inside the replacement engine itself.
//!    These abort the simulation with a diagnostic instead of silently
//!    continuing with a corrupted page/frame bijection.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Algorithm;

/// A configuration problem detected before replay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The frame count was zero; physical memory needs at least one frame.
    #[error("frame count must be positive")]
    NoFrames,

    /// The selected algorithm needs a refresh interval (`-r`).
    #[error("{algorithm} requires a refresh interval")]
    MissingRefresh {
        /// The algorithm that needs the parameter.
        algorithm: Algorithm,
    },

    /// The working-set clock needs a window length (`-t`).
    #[error("{algorithm} requires a tau window")]
    MissingTau {
        /// The algorithm that needs the parameter.
        algorithm: Algorithm,
    },
}

/// A trace source that could not be read.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Opening or reading the trace file failed.
    #[error("cannot read trace {path}: {source}")]
    Io {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A broken internal invariant of the page/frame tables or a policy.
///
/// Any of these indicates a defect in the eviction engine, never bad user
/// input. The simulation aborts as soon as one is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A page index outside the virtual address space.
    #[error("page index {page} out of range ({pages} pages)")]
    PageOutOfRange {
        /// Offending page index.
        page: usize,
        /// Size of the page table.
        pages: usize,
    },

    /// A frame index outside physical memory.
    #[error("frame index {frame} out of range ({frames} frames)")]
    FrameOutOfRange {
        /// Offending frame index.
        frame: usize,
        /// Size of the frame table.
        frames: usize,
    },

    /// A placement into a frame that was never evicted.
    #[error("placement into occupied frame {frame} (held by page {held})")]
    FrameOccupied {
        /// Target frame.
        frame: usize,
        /// Page currently occupying it.
        held: usize,
    },

    /// A placement of a page that is already resident elsewhere.
    #[error("page {page} is already resident in frame {frame}")]
    PageResident {
        /// Offending page index.
        page: usize,
        /// Frame it already occupies.
        frame: usize,
    },

    /// An eviction from a frame that holds no page.
    #[error("eviction from empty frame {frame}")]
    FrameEmpty {
        /// Offending frame.
        frame: usize,
    },

    /// The future-use queue of a page disagrees with the replay position.
    #[error("future queue for page {page} out of sync at access {now}")]
    FutureQueueDesync {
        /// Page whose queue is inconsistent.
        page: usize,
        /// Logical time of the access that noticed the mismatch.
        now: u64,
    },

    /// A victim sweep exhausted its probe budget without selecting a frame.
    #[error("replacement sweep failed to select a victim")]
    SweepStuck,
}

/// Sum of everything a one-shot simulation run can fail with.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unreadable trace source.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// Engine defect observed mid-replay.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
