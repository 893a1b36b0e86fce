//! Future-Use Index Tests.
//!
//! Verifies the pre-scan: 1-based positions, per-page ordering, and
//! front-to-back consumption.

use pretty_assertions::assert_eq;

use vmsim_core::core::future::FutureIndex;

use crate::common::read_trace;

/// Queue lengths equal each page's occurrence count in the trace.
#[test]
fn build_records_every_occurrence() {
    let index = FutureIndex::build(&read_trace(&[1, 2, 1, 3, 1]));
    assert_eq!(index.remaining(1), 3);
    assert_eq!(index.remaining(2), 1);
    assert_eq!(index.remaining(3), 1);
    assert_eq!(index.remaining(9), 0);
}

/// Positions are 1-based trace indices, consumed in order.
#[test]
fn positions_are_one_based_and_ordered() {
    let mut index = FutureIndex::build(&read_trace(&[1, 2, 1, 3, 1]));
    assert_eq!(index.next_use(1), Some(1));
    assert_eq!(index.pop(1), Some(1));
    assert_eq!(index.next_use(1), Some(3));
    assert_eq!(index.pop(1), Some(3));
    assert_eq!(index.pop(1), Some(5));
    assert_eq!(index.pop(1), None);
    assert_eq!(index.next_use(1), None);
}

/// An unreferenced page has no future occurrences.
#[test]
fn empty_trace_has_no_occurrences() {
    let mut index = FutureIndex::build(&read_trace(&[]));
    assert_eq!(index.next_use(0), None);
    assert_eq!(index.pop(0), None);
}
