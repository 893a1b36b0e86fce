//! Future-use index for the clairvoyant policy.
//!
//! Built by one full pre-scan of the trace before replay: every reference
//! pushes its 1-based trace position onto the queue of the referenced page.
//! During replay each reference to a page pops that page's queue front, so
//! the front always names the *next* occurrence after the current access.
//! Queues are populated exactly once and only drained afterwards.

use std::collections::{HashMap, VecDeque};

use crate::core::page::page_number;
use crate::trace::Trace;

/// Per-page queues of upcoming trace positions.
#[derive(Debug, Clone, Default)]
pub struct FutureIndex {
    queues: HashMap<usize, VecDeque<u64>>,
}

impl FutureIndex {
    /// Pre-scans the trace and records every reference position.
    pub fn build(trace: &Trace) -> Self {
        let mut queues: HashMap<usize, VecDeque<u64>> = HashMap::new();
        for (index, entry) in trace.entries().iter().enumerate() {
            let position = index as u64 + 1;
            queues
                .entry(page_number(entry.addr))
                .or_default()
                .push_back(position);
        }
        Self { queues }
    }

    /// Consumes the next recorded occurrence of `page`.
    pub fn pop(&mut self, page: usize) -> Option<u64> {
        self.queues.get_mut(&page).and_then(VecDeque::pop_front)
    }

    /// Position of the next occurrence of `page`, without consuming it.
    ///
    /// `None` means the page is never referenced again.
    pub fn next_use(&self, page: usize) -> Option<u64> {
        self.queues.get(&page).and_then(|queue| queue.front().copied())
    }

    /// Remaining recorded occurrences of `page`.
    pub fn remaining(&self, page: usize) -> usize {
        self.queues.get(&page).map_or(0, VecDeque::len)
    }
}
