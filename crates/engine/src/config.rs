//! Configuration for a simulation run.
//!
//! A [`Config`] carries everything the engine needs: the physical frame
//! count, the replacement [`Algorithm`], and the two optional policy
//! parameters (refresh interval and tau window). Configuration can be
//! assembled by a CLI layer or deserialized from JSON; either way,
//! [`Config::validate`] enforces the per-algorithm parameter requirements
//! before any replay starts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ConfigError;

/// Page-replacement algorithms.
///
/// Selects which policy resolves page faults when physical memory is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// Belady's optimal algorithm.
    ///
    /// Clairvoyant: evicts the resident page referenced farthest in the
    /// future, using queues precomputed from a full pre-scan of the trace.
    #[serde(alias = "Opt")]
    Opt,

    /// Second-chance FIFO approximation.
    ///
    /// A circular hand sweeps the frames, clearing reference bits and
    /// evicting the first page found with its bit already clear.
    #[serde(alias = "Clock")]
    Clock,

    /// Decaying-counter LRU approximation.
    ///
    /// Each resident page carries an 8-bit counter that is shifted right on
    /// every refresh interval; the page with the smallest counter loses.
    #[serde(alias = "Aging")]
    Aging,

    /// Working-set clock.
    ///
    /// A clock sweep that only evicts pages referenced outside the last
    /// `tau` accesses, with a recorded fallback to guarantee progress.
    #[serde(alias = "WorkingSetClock")]
    WorkingSetClock,
}

impl Algorithm {
    /// Canonical report name of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Opt => "OPT",
            Self::Clock => "CLOCK",
            Self::Aging => "AGING",
            Self::WorkingSetClock => "WORKING_SET_CLOCK",
        }
    }

    /// Whether the algorithm needs a refresh interval to run.
    pub const fn needs_refresh(self) -> bool {
        matches!(self, Self::Aging | Self::WorkingSetClock)
    }

    /// Whether the algorithm needs a tau window to run.
    pub const fn needs_tau(self) -> bool {
        matches!(self, Self::WorkingSetClock)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm name the command line did not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected opt, clock, aging, or work)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses the lowercase command-line spelling of an algorithm.
    ///
    /// Accepts `opt`, `clock`, `aging`, and `work` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "opt" => Ok(Self::Opt),
            "clock" => Ok(Self::Clock),
            "aging" => Ok(Self::Aging),
            "work" => Ok(Self::WorkingSetClock),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Parameters of one simulation run.
///
/// # Examples
///
/// ```
/// use vmsim_core::config::{Algorithm, Config};
///
/// let config = Config {
///     frames: 8,
///     algorithm: Algorithm::Aging,
///     refresh: Some(5),
///     tau: None,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Number of physical memory frames (must be positive).
    pub frames: usize,

    /// Replacement algorithm driving eviction decisions.
    pub algorithm: Algorithm,

    /// Refresh interval in accesses; required by AGING and WORKING_SET_CLOCK.
    #[serde(default)]
    pub refresh: Option<u64>,

    /// Working-set window in accesses; required by WORKING_SET_CLOCK.
    #[serde(default)]
    pub tau: Option<u64>,
}

impl Config {
    /// Checks the per-algorithm parameter requirements.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the frame count is zero, if AGING or
    /// WORKING_SET_CLOCK is selected without a refresh interval, or if
    /// WORKING_SET_CLOCK is selected without a tau window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.algorithm.needs_refresh() && self.refresh.is_none() {
            return Err(ConfigError::MissingRefresh {
                algorithm: self.algorithm,
            });
        }
        if self.algorithm.needs_tau() && self.tau.is_none() {
            return Err(ConfigError::MissingTau {
                algorithm: self.algorithm,
            });
        }
        Ok(())
    }
}
