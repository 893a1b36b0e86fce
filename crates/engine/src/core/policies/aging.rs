//! Aging Replacement Policy.
//!
//! A decaying-counter LRU approximation. Each resident page carries an
//! 8-bit counter holding the last eight refresh intervals of reference
//! history, most recent bit highest. On every access, hit or fault, the
//! policy first checks whether a refresh is due (`now - last_refresh >=
//! refresh_interval`); a due refresh shifts every resident counter right by
//! one bit. A hit then ORs the top bit back in. The fault victim is the
//! resident page with the smallest counter, ties broken by the lowest frame
//! index.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(F) when a refresh is due, O(1) otherwise
//!   - `on_fault()`: O(F)
//! - **Space Complexity:** O(1) beyond the shared tables

use tracing::debug;

use super::Policy;
use crate::core::page::{REF_TOP_BIT, ResidencyTable};
use crate::error::InvariantViolation;

/// Aging policy state: the refresh interval and the time of the last shift.
#[derive(Debug)]
pub struct AgingPolicy {
    refresh_interval: u64,
    last_refresh: u64,
}

impl AgingPolicy {
    /// Creates the policy with the given refresh interval, in accesses.
    pub const fn new(refresh_interval: u64) -> Self {
        Self {
            refresh_interval,
            last_refresh: 0,
        }
    }

    /// Shifts every resident counter right once when an interval has passed.
    fn refresh_if_due(&mut self, table: &mut ResidencyTable, now: u64) {
        if now - self.last_refresh < self.refresh_interval {
            return;
        }
        for frame in 0..table.frame_count() {
            if let Some(page) = table.occupant(frame) {
                table.page_mut(page).referenced >>= 1;
            }
        }
        self.last_refresh = now;
        debug!(now, "reference counters aged");
    }
}

impl Policy for AgingPolicy {
    fn on_hit(
        &mut self,
        table: &mut ResidencyTable,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation> {
        self.refresh_if_due(table, now);
        table.page_mut(page).referenced |= REF_TOP_BIT;
        Ok(())
    }

    fn on_fault(
        &mut self,
        table: &mut ResidencyTable,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation> {
        self.refresh_if_due(table, now);

        if let Some(frame) = table.first_free_frame() {
            // Placement already sets the top bit.
            return table.place(page, frame, now);
        }

        let mut coldest: Option<(usize, u8)> = None;
        for frame in 0..table.frame_count() {
            let occupant = table
                .occupant(frame)
                .ok_or(InvariantViolation::FrameEmpty { frame })?;
            let counter = table.page(occupant).referenced;
            if coldest.is_none_or(|(_, best)| counter < best) {
                coldest = Some((frame, counter));
            }
        }

        let (frame, counter) = coldest.ok_or(InvariantViolation::SweepStuck)?;
        let evicted = table.evict(frame)?;
        debug!(victim = evicted, frame, counter, page, "aging eviction");
        table.place(page, frame, now)
    }
}
