//! Clock Policy Tests.
//!
//! Verifies second-chance sweeps, hand persistence, and the bounded probe
//! count. The hand starts at frame 0.

use pretty_assertions::assert_eq;

use vmsim_core::config::Algorithm;
use vmsim_core::core::page::{REF_TOP_BIT, ResidencyTable};
use vmsim_core::core::policies::{ClockPolicy, Policy};

use crate::common::{config, read_trace, replay, trace_of};

/// Reference string 1,2,1,3 with two frames: faults on accesses 1, 2, 4;
/// access 3 is a hit. The sweep for page 3 clears both bits and comes back
/// to frame 0, so the final resident set is {2, 3} with page 3 in frame 0.
#[test]
fn second_chance_scenario() {
    let trace = read_trace(&[1, 2, 1, 3]);
    let simulator = replay(&config(Algorithm::Clock, 2), &trace);

    let report = simulator.report();
    assert_eq!(report.accesses, 4);
    assert_eq!(report.faults, 3);
    assert_eq!(report.writebacks, 0);
    let table = simulator.table();
    assert_eq!(table.occupant(0), Some(3));
    assert_eq!(table.occupant(1), Some(2));
}

/// Filling free frames does not move the hand: the first eviction sweep
/// still starts at frame 0.
#[test]
fn free_frame_fill_leaves_hand_alone() {
    let trace = read_trace(&[1, 2, 3, 4]);
    let simulator = replay(&config(Algorithm::Clock, 3), &trace);

    // All three bits were set by placement; the sweep clears 0, 1, 2 and
    // wraps to evict frame 0.
    assert_eq!(simulator.report().faults, 4);
    let table = simulator.table();
    assert_eq!(table.occupant(0), Some(4));
    assert_eq!(table.occupant(1), Some(2));
    assert_eq!(table.occupant(2), Some(3));
}

/// A full memory with every bit set resolves within two revolutions and
/// evicts the frame the hand started on.
#[test]
fn all_bits_set_resolves_at_hand() {
    let mut table = ResidencyTable::new(4);
    for (frame, page) in [(0, 10), (1, 11), (2, 12), (3, 13)] {
        table.place(page, frame, frame as u64 + 1).unwrap();
        assert_eq!(table.page(page).referenced, REF_TOP_BIT);
    }

    let mut policy = ClockPolicy::new();
    policy.on_fault(&mut table, 99, 5).unwrap();

    assert_eq!(table.occupant(0), Some(99));
    assert_eq!(policy.hand(), 1);
    // Second chances consumed: the surviving bits are clear.
    for page in [11, 12, 13] {
        assert_eq!(table.page(page).referenced, 0);
    }
}

/// A set bit buys exactly one revolution: the sweep clears it and evicts
/// the first page found with its bit already clear.
#[test]
fn set_bit_survives_sweep() {
    let mut table = ResidencyTable::new(2);
    table.place(1, 0, 1).unwrap();
    table.place(2, 1, 2).unwrap();
    table.page_mut(2).referenced = 0;

    let mut policy = ClockPolicy::new();
    policy.on_fault(&mut table, 9, 3).unwrap();

    // Page 1 spent its second chance; page 2's clear bit made it the victim.
    assert_eq!(table.occupant(0), Some(1));
    assert_eq!(table.occupant(1), Some(9));
    assert_eq!(table.page(1).referenced, 0);
    assert_eq!(policy.hand(), 0);
}

/// Dirty victims cost a write-back; a single-frame memory alternates.
#[test]
fn dirty_victim_writes_back() {
    let trace = trace_of(&[(1, true), (2, false), (1, false)]);
    let simulator = replay(&config(Algorithm::Clock, 1), &trace);

    let report = simulator.report();
    assert_eq!(report.faults, 3);
    assert_eq!(report.writebacks, 1);
}
