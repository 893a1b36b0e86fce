//! Working-Set Clock Replacement Policy.
//!
//! A clock sweep restricted by a working-set window: only pages whose last
//! access lies more than `tau` accesses in the past are eviction-eligible.
//! On every access a due refresh (`now - last_refresh >= refresh_interval`)
//! clears the reference bit of every resident page.
//!
//! The fault sweep starts at the persistent hand and classifies each frame:
//!
//! - reference bit set: clear it, stamp the page with the current time, and
//!   move on; the page was recently used and stays.
//! - out of the window and clean: this is the victim; the sweep stops.
//! - out of the window and dirty: the dirty bit is flipped false as a
//!   "considered" marker and the frame is remembered as the oldest dirty
//!   candidate.
//! - inside the window with the bit clear: remembered as the oldest-
//!   timestamp fallback.
//!
//! A full revolution without a clean out-of-window page falls back to the
//! oldest dirty candidate, then to the globally oldest timestamp, so a
//! fault always resolves. A revolution that recorded no candidate at all
//! (every resident page had its bit set) is followed by one more sweep,
//! which necessarily resolves because all bits are clear by then.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(F) when a refresh is due, O(1) otherwise
//!   - `on_fault()`: O(F), ≤ 2F probes worst case
//! - **Space Complexity:** O(1) beyond the shared tables

use tracing::debug;

use super::Policy;
use crate::core::page::{REF_TOP_BIT, ResidencyTable};
use crate::error::InvariantViolation;

/// Working-set clock state: window, refresh bookkeeping, and the hand.
#[derive(Debug)]
pub struct WsClockPolicy {
    refresh_interval: u64,
    tau: u64,
    hand: usize,
    last_refresh: u64,
}

impl WsClockPolicy {
    /// Creates the policy with a refresh interval and a window, in accesses.
    pub const fn new(refresh_interval: u64, tau: u64) -> Self {
        Self {
            refresh_interval,
            tau,
            hand: 0,
            last_refresh: 0,
        }
    }

    /// Current hand position, for diagnostics.
    pub const fn hand(&self) -> usize {
        self.hand
    }

    /// Clears every resident reference bit when an interval has passed.
    fn refresh_if_due(&mut self, table: &mut ResidencyTable, now: u64) {
        if now - self.last_refresh < self.refresh_interval {
            return;
        }
        for frame in 0..table.frame_count() {
            if let Some(page) = table.occupant(frame) {
                table.page_mut(page).referenced = 0;
            }
        }
        self.last_refresh = now;
        debug!(now, "reference bits cleared");
    }

    /// Evicts a recorded fallback candidate and installs the faulting page.
    fn evict_fallback(
        &mut self,
        table: &mut ResidencyTable,
        frame: usize,
        page: usize,
        now: u64,
    ) -> Result<(), InvariantViolation> {
        let frames = table.frame_count();
        let evicted = table.evict(frame)?;
        debug!(victim = evicted, frame, page, "working-set fallback eviction");
        table.place(page, frame, now)?;
        self.hand = (frame + 1) % frames;
        Ok(())
    }
}

impl Policy for WsClockPolicy {
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
            return table.place(page, frame, now);
        }

        let frames = table.frame_count();
        let mut oldest_dirty: Option<(usize, u64)> = None;
        let mut oldest_in_window: Option<(usize, u64)> = None;

        for probe in 0..2 * frames {
            if probe == frames {
                // One full revolution without a clean out-of-window page.
                if let Some((frame, _)) = oldest_dirty.or(oldest_in_window) {
                    return self.evict_fallback(table, frame, page, now);
                }
                // Every page was referenced; the bits are clear now, so one
                // more revolution must resolve.
            }

            let frame = self.hand;
            self.hand = (self.hand + 1) % frames;
            let occupant = table
                .occupant(frame)
                .ok_or(InvariantViolation::FrameEmpty { frame })?;
            let entry = table.page_mut(occupant);

            if entry.referenced != 0 {
                entry.referenced = 0;
                entry.timestamp = now;
            } else if now - entry.timestamp > self.tau {
                if entry.dirty {
                    // Considered: schedule the write and leave the page a
                    // clean candidate rather than a free victim.
                    entry.dirty = false;
                    if oldest_dirty.is_none_or(|(_, stamp)| entry.timestamp < stamp) {
                        oldest_dirty = Some((frame, entry.timestamp));
                    }
                } else {
                    let evicted = table.evict(frame)?;
                    debug!(victim = evicted, frame, page, "working-set eviction");
                    return table.place(page, frame, now);
                }
            } else if oldest_in_window.is_none_or(|(_, stamp)| entry.timestamp < stamp) {
                oldest_in_window = Some((frame, entry.timestamp));
            }
        }

        if let Some((frame, _)) = oldest_dirty.or(oldest_in_window) {
            return self.evict_fallback(table, frame, page, now);
        }
        Err(InvariantViolation::SweepStuck)
    }
}
