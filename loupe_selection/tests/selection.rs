// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `loupe_selection` crate.
//!
//! These exercise the cycling policy and how the two slots, their mutual
//! exclusion and the revision counter interact.

use loupe_selection::{SelectionPair, Slot, cycle};

#[test]
fn empty_pair_basics() {
    let sel = SelectionPair::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.primary(), None);
    assert_eq!(sel.secondary(), None);
    assert_eq!(sel.revision(), 0);
    assert_eq!(sel.iter().count(), 0);
}

#[test]
fn first_click_picks_topmost() {
    assert_eq!(cycle(&[10, 20, 30], None, None), Some(10));
}

#[test]
fn repeated_clicks_drill_down_then_wrap() {
    let hits = ["L1", "L2", "L3"];
    assert_eq!(cycle(&hits, None, Some(&"L2")), Some("L3"));
    assert_eq!(cycle(&hits, None, Some(&"L3")), Some("L1"));
}

#[test]
fn current_not_under_pointer_restarts_at_top() {
    assert_eq!(cycle(&[1, 2, 3], None, Some(&99)), Some(1));
}

#[test]
fn other_slot_is_skipped_entirely() {
    let hits = ["L1", "L2", "L3"];
    // L3 belongs to the other slot, so L2 is now the deepest candidate.
    assert_eq!(cycle(&hits, Some(&"L3"), Some(&"L2")), Some("L1"));
    assert_eq!(cycle(&hits, Some(&"L1"), None), Some("L2"));
    assert_eq!(cycle(&hits, Some(&"L2"), Some(&"L1")), Some("L3"));
}

#[test]
fn empty_candidates_clear_the_slot() {
    assert_eq!(cycle::<u32>(&[], None, Some(&1)), None);
    assert_eq!(cycle(&[5], Some(&5), Some(&5)), None);
}

#[test]
fn pair_cycles_primary_through_stack() {
    let hits = ["L1", "L2", "L3"];
    let mut sel = SelectionPair::new();
    sel.set(Slot::Primary, Some("L2"));

    assert_eq!(sel.cycle(Slot::Primary, &hits), Some(&"L3"));
    assert_eq!(sel.cycle(Slot::Primary, &hits), Some(&"L1"));
}

#[test]
fn pair_slots_stay_exclusive_when_cycling() {
    let hits = [1, 2];
    let mut sel = SelectionPair::new();
    sel.cycle(Slot::Primary, &hits);
    sel.cycle(Slot::Secondary, &hits);
    assert_eq!(sel.primary(), Some(&1));
    assert_eq!(sel.secondary(), Some(&2));

    // Only one candidate remains for each slot; cycling keeps them apart.
    for _ in 0..4 {
        sel.cycle(Slot::Primary, &hits);
        sel.cycle(Slot::Secondary, &hits);
        assert_ne!(sel.primary(), sel.secondary());
    }
}

#[test]
fn cycling_on_empty_point_clears_only_that_slot() {
    let mut sel = SelectionPair::new();
    sel.set(Slot::Primary, Some(1));
    sel.set(Slot::Secondary, Some(2));

    assert_eq!(sel.cycle(Slot::Secondary, &[]), None);
    assert_eq!(sel.primary(), Some(&1));
    assert_eq!(sel.secondary(), None);
}

#[test]
fn set_moves_key_out_of_other_slot() {
    let mut sel = SelectionPair::new();
    sel.set(Slot::Primary, Some(7));
    sel.set(Slot::Secondary, Some(7));

    assert_eq!(sel.primary(), None);
    assert_eq!(sel.secondary(), Some(&7));
    assert_eq!(sel.slot_of(&7), Some(Slot::Secondary));
}

#[test]
fn revision_bumps_only_on_change() {
    let mut sel = SelectionPair::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.set(Slot::Primary, Some(1));
    assert_eq!(sel.revision(), 1);

    // No-op: same key into the same slot.
    sel.set(Slot::Primary, Some(1));
    assert_eq!(sel.revision(), 1);

    // Single candidate that is already selected: cycling keeps it.
    sel.cycle(Slot::Primary, &[1]);
    assert_eq!(sel.revision(), 1);

    sel.clear_slot(Slot::Secondary);
    assert_eq!(sel.revision(), 1);

    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn slot_other_round_trips() {
    assert_eq!(Slot::Primary.other(), Slot::Secondary);
    assert_eq!(Slot::Secondary.other(), Slot::Primary);
    assert_eq!(Slot::default(), Slot::Primary);
}
