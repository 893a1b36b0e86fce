//! Working-Set Clock Policy Tests.
//!
//! Verifies window-based eligibility, the "considered" handling of dirty
//! out-of-window pages, both fallback orders, and the refresh that clears
//! resident reference bits.

use pretty_assertions::assert_eq;

use vmsim_core::config::Algorithm;
use vmsim_core::core::page::ResidencyTable;
use vmsim_core::core::policies::{Policy, WsClockPolicy};

use crate::common::{config_with, read_trace, replay};

/// The first clean out-of-window page in hand order is the victim and the
/// sweep stops there.
#[test]
fn evicts_first_clean_out_of_window_page() {
    // Refresh at access 3 clears both bits; tau 0 puts both pages outside
    // the window, so frame 0 goes and frame 1 is never disturbed.
    let trace = read_trace(&[1, 2, 3]);
    let simulator = replay(&config_with(Algorithm::WorkingSetClock, 2, 3, 0), &trace);

    let report = simulator.report();
    assert_eq!(report.faults, 3);
    assert_eq!(report.writebacks, 0);
    let table = simulator.table();
    assert_eq!(table.occupant(0), Some(3));
    assert_eq!(table.occupant(1), Some(2));
}

/// A page with its reference bit set at sweep start is spared: the bit is
/// cleared, the page is restamped, and the victim comes from elsewhere.
#[test]
fn referenced_page_is_not_the_victim() {
    let mut table = ResidencyTable::new(2);
    table.place(1, 0, 1).unwrap();
    table.place(2, 1, 2).unwrap();
    table.page_mut(2).referenced = 0;

    let mut policy = WsClockPolicy::new(100, 100);
    policy.on_fault(&mut table, 9, 10).unwrap();

    // Page 2 was in the window but unreferenced; it is the oldest-timestamp
    // fallback. Page 1's set bit protected it.
    assert_eq!(table.occupant(0), Some(1));
    assert_eq!(table.occupant(1), Some(9));
    assert_eq!(table.page(1).referenced, 0);
    assert_eq!(table.page(1).timestamp, 10);
    assert_eq!(table.writebacks(), 0);
    assert_eq!(policy.hand(), 0);
}

/// A dirty out-of-window page is only considered: its dirty bit flips off,
/// it stays resident, and a later clean out-of-window page is taken.
#[test]
fn dirty_page_is_considered_not_evicted() {
    let mut table = ResidencyTable::new(3);
    table.place(1, 0, 1).unwrap();
    table.set_dirty(1);
    table.page_mut(1).referenced = 0;
    table.place(2, 1, 2).unwrap();
    table.page_mut(2).referenced = 0;
    table.place(3, 2, 3).unwrap();

    let mut policy = WsClockPolicy::new(100, 2);
    policy.on_fault(&mut table, 9, 10).unwrap();

    assert_eq!(table.occupant(0), Some(1));
    assert!(!table.page(1).dirty);
    assert_eq!(table.occupant(1), Some(9));
    assert_eq!(table.occupant(2), Some(3));
    assert_eq!(table.writebacks(), 0);
    assert_eq!(policy.hand(), 2);
}

/// With no clean out-of-window page, the fallback prefers the oldest dirty
/// out-of-window candidate; the flip means no write-back is charged.
#[test]
fn fallback_prefers_oldest_dirty_candidate() {
    let mut table = ResidencyTable::new(2);
    table.place(1, 0, 1).unwrap();
    table.set_dirty(1);
    table.page_mut(1).referenced = 0;
    table.place(2, 1, 2).unwrap();
    table.set_dirty(2);
    table.page_mut(2).referenced = 0;

    let mut policy = WsClockPolicy::new(100, 2);
    policy.on_fault(&mut table, 9, 10).unwrap();

    assert_eq!(table.occupant(0), Some(9));
    assert_eq!(table.occupant(1), Some(2));
    assert!(!table.page(2).dirty);
    assert_eq!(table.writebacks(), 0);
    assert_eq!(policy.hand(), 1);
}

/// With every page inside the window, the globally oldest timestamp is
/// evicted; a dirty victim here does cost a write-back.
#[test]
fn fallback_evicts_oldest_in_window_page() {
    let mut table = ResidencyTable::new(2);
    table.place(1, 0, 1).unwrap();
    table.set_dirty(1);
    table.page_mut(1).referenced = 0;
    table.place(2, 1, 2).unwrap();
    table.page_mut(2).referenced = 0;

    let mut policy = WsClockPolicy::new(100, 100);
    policy.on_fault(&mut table, 9, 10).unwrap();

    assert_eq!(table.occupant(0), Some(9));
    assert_eq!(table.occupant(1), Some(2));
    assert_eq!(table.writebacks(), 1);
    assert_eq!(policy.hand(), 1);
}

/// A sweep where every page is referenced clears all bits, restamps every
/// page, and resolves on the second revolution.
#[test]
fn all_referenced_sweep_still_terminates() {
    let trace = read_trace(&[1, 2, 3]);
    let simulator = replay(&config_with(Algorithm::WorkingSetClock, 2, 100, 2), &trace);

    assert_eq!(simulator.report().faults, 3);
    let table = simulator.table();
    assert_eq!(table.occupant(0), Some(3));
    assert_eq!(table.occupant(1), Some(2));
}

/// A due refresh clears the reference bits of every resident page.
#[test]
fn refresh_clears_resident_bits() {
    let trace = read_trace(&[1, 2]);
    let simulator = replay(&config_with(Algorithm::WorkingSetClock, 2, 2, 100), &trace);

    let table = simulator.table();
    assert_eq!(table.page(1).referenced, 0);
    assert_ne!(table.page(2).referenced, 0);
}
