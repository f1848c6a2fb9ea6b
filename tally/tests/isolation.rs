//! Cross-type isolation scenarios for accumulator units.
//!
//! Exercises the library API end-to-end: owned units, closure form, and
//! shared units must all keep per-unit state private while reporting the
//! same running totals for the same deltas.

use tally::core::accumulator::{Accumulator, running_totals};
use tally::core::shared::SharedAccumulator;
use tally::core::stats::{Stats, summarize};

#[test]
fn interleaved_units_keep_private_totals() {
    let mut f = Accumulator::default();
    assert_eq!(f.invoke(3), 3);
    assert_eq!(f.invoke(4), 7);

    let mut g = Accumulator::default();
    assert_eq!(g.invoke(2), 2);
    assert_eq!(g.invoke(2), 4);

    assert_eq!(f.invoke(2), 9);

    let mut h = Accumulator::new(10);
    assert_eq!(h.invoke(-3), 7);
}

#[test]
fn closure_form_matches_struct_form() {
    let deltas = [4, -1, 10, 0, -20];

    let mut unit = Accumulator::new(3);
    let struct_totals = running_totals(&mut unit, &deltas);

    let mut invoke = Accumulator::new(3).into_fn();
    let closure_totals: Vec<i64> = deltas.iter().map(|&delta| invoke(delta)).collect();

    assert_eq!(struct_totals, closure_totals);
    assert_eq!(struct_totals, vec![7, 6, 16, 16, -4]);
}

#[test]
fn owned_and_shared_units_agree_through_the_seam() {
    let deltas = [5, 5, -3];

    let mut owned = Accumulator::new(1);
    let mut shared = SharedAccumulator::new(1);

    assert_eq!(
        running_totals(&mut owned, &deltas),
        running_totals(&mut shared, &deltas)
    );
}

#[test]
fn shared_clones_share_state_but_new_instances_do_not() {
    let shared = SharedAccumulator::default();
    let clone = shared.clone();
    let unrelated = SharedAccumulator::default();

    assert_eq!(shared.invoke(2), 2);
    assert_eq!(clone.invoke(2), 4);
    assert_eq!(unrelated.invoke(2), 2);
}

#[test]
fn stats_units_are_isolated_from_accumulators_and_each_other() {
    let mut unit = Accumulator::default();
    let mut stats = Stats::new();

    stats.observe(unit.invoke(5));
    stats.observe(unit.invoke(-2));

    let summary = stats.summary().expect("summary");
    assert_eq!(summary.min, 3);
    assert_eq!(summary.max, 5);
    assert_eq!(summary.sum, 8);

    // The one-shot fold sees only its own input.
    assert_eq!(summarize(&[1]).expect("summary").count, 1);
    assert_eq!(stats.summary().expect("summary").count, 2);
}
