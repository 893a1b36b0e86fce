//! Belady's Optimal (OPT) Replacement Policy.
//!
//! Clairvoyant: with the whole trace known in advance, the victim is the
//! resident page whose next reference lies farthest in the future, and a
//! page never referenced again is the best possible victim. No realizable
//! policy beats OPT's fault count on the same trace and frame count, which
//! makes it the baseline the approximations are measured against.
//!
//! Lookahead comes from the precomputed [`FutureIndex`]; every reference to
//! a page, hit or fault alike, consumes that page's queue front so the
//! front always names the next occurrence *after* the current access.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(1)
//!   - `on_fault()`: O(F) where F is the frame count
//! - **Space Complexity:** O(T) queue entries for a T-reference trace

use tracing::debug;

use super::Policy;
use crate::core::future::FutureIndex;
use crate::core::page::ResidencyTable;
use crate::error::InvariantViolation;

/// OPT policy state: the future-use queues.
#[derive(Debug)]
pub struct OptPolicy {
    future: FutureIndex,
}

impl OptPolicy {
    /// Creates the policy around a prebuilt future-use index.
    pub const fn new(future: FutureIndex) -> Self {
        Self { future }
    }

    /// Consumes the queue entry for the current access.
    ///
    /// The front of the faulting or hit page's queue must be the current
    /// position; anything else means the index and the replay have diverged.
    fn consume(&mut self, page: usize, now: u64) -> Result<(), InvariantViolation> {
        match self.future.pop(page) {
            Some(position) if position == now => Ok(()),
            _ => Err(InvariantViolation::FutureQueueDesync { page, now }),
        }
    }
}

impl Policy for OptPolicy {
    fn on_hit(
        &mut self,
        _table: &mut ResidencyTable,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation> {
        self.consume(page, now)
    }

    fn on_fault(
        &mut self,
        table: &mut ResidencyTable,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation> {
        self.consume(page, now)?;

        if let Some(frame) = table.first_free_frame() {
            return table.place(page, frame, now);
        }

        // A page never referenced again wins immediately; otherwise pick the
        // resident page whose next use is farthest away, lowest frame on ties.
        let mut farthest: Option<(usize, u64)> = None;
        let mut dead: Option<usize> = None;
        for frame in 0..table.frame_count() {
            let occupant = table
                .occupant(frame)
                .ok_or(InvariantViolation::FrameEmpty { frame })?;
            match self.future.next_use(occupant) {
                None => {
                    dead = Some(frame);
                    break;
                }
                Some(next) => {
                    if farthest.is_none_or(|(_, best)| next > best) {
                        farthest = Some((frame, next));
                    }
                }
            }
        }

        let victim = dead
            .or_else(|| farthest.map(|(frame, _)| frame))
            .ok_or(InvariantViolation::SweepStuck)?;
        let evicted = table.evict(victim)?;
        debug!(victim = evicted, frame = victim, page, "optimal eviction");
        table.place(page, victim, now)
    }
}
