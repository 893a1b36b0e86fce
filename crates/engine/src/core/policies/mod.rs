//! Eviction policies.
//!
//! Implements the four algorithms for resolving page faults against a full
//! physical memory.
//!
//! # Policies
//!
//! - `Opt`: Belady's clairvoyant optimum.
//! - `Clock`: second-chance FIFO approximation.
//! - `Aging`: decaying 8-bit counter LRU approximation.
//! - `WsClock`: working-set clock with a window-based eligibility test.

/// Decaying-counter LRU approximation.
pub mod aging;

/// Second-chance FIFO approximation.
pub mod clock;

/// Belady's optimal (clairvoyant) policy.
pub mod opt;

/// Working-set clock policy.
pub mod wsclock;

pub use aging::AgingPolicy;
pub use clock::ClockPolicy;
pub use opt::OptPolicy;
pub use wsclock::WsClockPolicy;

use crate::config::{Algorithm, Config};
use crate::core::future::FutureIndex;
use crate::core::page::ResidencyTable;
use crate::error::{ConfigError, InvariantViolation};
use crate::trace::Trace;

/// Trait for page-replacement policies.
///
/// `on_fault` is called only when the faulting page is not resident and must
/// end with the page placed in some frame, evicting a victim when no frame
/// is free. `on_hit` is called only when the page is resident; it updates
/// policy metadata and never moves pages.
pub trait Policy: Send + Sync {
    /// Updates policy state for a reference to a resident page.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if the policy's own bookkeeping is
    /// observed out of sync with the replay.
    fn on_hit(
        &mut self,
        table: &mut ResidencyTable,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation>;

    /// Resolves a fault by placing `page`, evicting a victim if needed.
    ///
    /// # Errors
    ///
    /// Returns an [`InvariantViolation`] if the page/frame tables are found
    /// in a state the policy's preconditions rule out.
    fn on_fault(
        &mut self,
        table: &mut ResidencyTable,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation>;
}

/// Builds the policy selected by the configuration.
///
/// For OPT this is where the future-use index is built, by one full
/// pre-scan of `trace`.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the selected algorithm is missing a
/// required parameter.
pub fn select(config: &Config, trace: &Trace) -> Result<Box<dyn Policy>, ConfigError> {
    match config.algorithm {
        Algorithm::Opt => Ok(Box::new(OptPolicy::new(FutureIndex::build(trace)))),
        Algorithm::Clock => Ok(Box::new(ClockPolicy::new())),
        Algorithm::Aging => {
            let refresh = config.refresh.ok_or(ConfigError::MissingRefresh {
                algorithm: Algorithm::Aging,
            })?;
            Ok(Box::new(AgingPolicy::new(refresh)))
        }
        Algorithm::WorkingSetClock => {
            let refresh = config.refresh.ok_or(ConfigError::MissingRefresh {
                algorithm: Algorithm::WorkingSetClock,
            })?;
            let tau = config.tau.ok_or(ConfigError::MissingTau {
                algorithm: Algorithm::WorkingSetClock,
            })?;
            Ok(Box::new(WsClockPolicy::new(refresh, tau)))
        }
    }
}
