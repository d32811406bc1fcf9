//! Property-based tests for availability run detection.
//!
//! These tests verify the structural invariants of the run algorithm:
//! runs are ascending, disjoint, maximal, and cover exactly the available
//! numbers of the queried span.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::{
    available_count_in_range, available_runs, format_runs, is_available, NONE_MARKER,
};
use crate::config::FloorPlan;
use crate::guest::{Guest, IdentityNumber};
use crate::room::{NumberRange, RoomNumber};
use crate::RoomCatalog;

// Strategy for a set of rooms to book (duplicates are harmless)
fn booked_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(100u16..=199, 0..80)
}

// Strategy for a query span, deliberately allowed to hang over the catalog
// edges so absent numbers are exercised
fn span_strategy() -> impl Strategy<Value = NumberRange> {
    (90u16..=205, 0u16..=50).prop_map(|(start, extra)| {
        let end = start.saturating_add(extra);
        NumberRange::new(RoomNumber::new(start), RoomNumber::new(end)).unwrap()
    })
}

fn build_catalog(booked: &[u16]) -> RoomCatalog {
    let mut catalog = RoomCatalog::initialize(&FloorPlan::default());
    for &n in booked {
        if let Ok(room) = catalog.lookup_mut(RoomNumber::new(n)) {
            if !room.is_booked() {
                let identity = IdentityNumber::parse("123456789012").unwrap();
                room.install_guest(Guest::new("Guest", 1, identity));
            }
        }
    }
    catalog
}

proptest! {
    // PROPERTY: every number inside a run is an available catalog room
    // within the queried span, and the runs cover all such numbers.
    #[test]
    fn prop_runs_cover_exactly_the_available_numbers(
        booked in booked_strategy(),
        span in span_strategy(),
    ) {
        let catalog = build_catalog(&booked);
        let runs = available_runs(&catalog, span);

        let mut covered = BTreeSet::new();
        for run in &runs {
            prop_assert!(span.contains(run.first()));
            prop_assert!(span.contains(run.last()));
            for n in run.first().value()..=run.last().value() {
                prop_assert!(is_available(&catalog, RoomNumber::new(n)));
                covered.insert(n);
            }
        }
        prop_assert_eq!(covered.len(), available_count_in_range(&catalog, span));
    }

    // PROPERTY: runs are ascending and separated by at least one
    // unavailable number.
    #[test]
    fn prop_runs_are_ascending_and_disjoint(
        booked in booked_strategy(),
        span in span_strategy(),
    ) {
        let catalog = build_catalog(&booked);
        let runs = available_runs(&catalog, span);

        for pair in runs.windows(2) {
            prop_assert!(
                u32::from(pair[0].last().value()) + 1 < u32::from(pair[1].first().value())
            );
        }
    }

    // PROPERTY: runs are maximal - the numbers immediately before and after
    // a run are unavailable or outside the span.
    #[test]
    fn prop_runs_are_maximal(
        booked in booked_strategy(),
        span in span_strategy(),
    ) {
        let catalog = build_catalog(&booked);

        for run in available_runs(&catalog, span) {
            if run.first().value() > span.first().value() {
                let before = RoomNumber::new(run.first().value() - 1);
                prop_assert!(!is_available(&catalog, before));
            }
            if run.last().value() < span.last().value() {
                let after = RoomNumber::new(run.last().value() + 1);
                prop_assert!(!is_available(&catalog, after));
            }
        }
    }

    // PROPERTY: the rendered text is the None marker exactly when there are
    // no runs, and otherwise joins one fragment per run.
    #[test]
    fn prop_format_matches_run_count(
        booked in booked_strategy(),
        span in span_strategy(),
    ) {
        let catalog = build_catalog(&booked);
        let runs = available_runs(&catalog, span);
        let text = format_runs(&runs);

        if runs.is_empty() {
            prop_assert_eq!(text, NONE_MARKER);
        } else {
            prop_assert_eq!(text.split(", ").count(), runs.len());
        }
    }
}
