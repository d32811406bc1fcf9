//! Availability reporting over the room catalog.
//!
//! Availability is derived on demand from live booking state: counts over
//! the whole catalog or a number span, and the contiguous-run rendering used
//! by the summary view. A number absent from the catalog breaks a run
//! exactly like a booked number does; it contributes to no count.

use std::fmt;

use crate::catalog::RoomCatalog;
use crate::room::{NumberRange, RoomNumber};

/// Fixed marker rendered when no room in a span is available.
pub const NONE_MARKER: &str = "None";

/// Delimiter joining rendered runs.
const RUN_DELIMITER: &str = ", ";

/// A maximal sequence of consecutive room numbers, all currently available.
///
/// Renders as a single number (`104`) for a run of length one, and as
/// `first-last` (`103-105`) otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRun {
    first: RoomNumber,
    last: RoomNumber,
}

impl AvailabilityRun {
    /// Returns the first number of the run.
    #[must_use]
    pub const fn first(&self) -> RoomNumber {
        self.first
    }

    /// Returns the last number of the run.
    #[must_use]
    pub const fn last(&self) -> RoomNumber {
        self.last
    }

    /// Returns the number of rooms in the run.
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.last.value() - self.first.value() + 1
    }

    /// Returns `true` if the run is empty. Runs are never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for AvailabilityRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

/// Counts available rooms across the whole catalog.
#[must_use]
pub fn available_count(catalog: &RoomCatalog) -> usize {
    catalog.iter().filter(|room| !room.is_booked()).count()
}

/// Counts available rooms with numbers in `range`.
///
/// Numbers in the span that match no catalog room contribute nothing,
/// neither available nor booked.
#[must_use]
pub fn available_count_in_range(catalog: &RoomCatalog, range: NumberRange) -> usize {
    range.iter().filter(|&n| is_available(catalog, n)).count()
}

/// Collects the maximal contiguous runs of available numbers in `range`.
///
/// Scans ascending; a booked room or a number absent from the catalog ends
/// the current run. Returned runs are ascending and disjoint.
#[must_use]
pub fn available_runs(catalog: &RoomCatalog, range: NumberRange) -> Vec<AvailabilityRun> {
    let mut runs = Vec::new();
    let mut open: Option<AvailabilityRun> = None;

    for number in range {
        if is_available(catalog, number) {
            match open.as_mut() {
                Some(run) => run.last = number,
                None => {
                    open = Some(AvailabilityRun {
                        first: number,
                        last: number,
                    });
                }
            }
        } else if let Some(run) = open.take() {
            runs.push(run);
        }
    }
    if let Some(run) = open {
        runs.push(run);
    }
    runs
}

/// Renders runs joined by `", "`, or the fixed `None` marker for an empty
/// list.
#[must_use]
pub fn format_runs(runs: &[AvailabilityRun]) -> String {
    if runs.is_empty() {
        NONE_MARKER.to_string()
    } else {
        runs.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(RUN_DELIMITER)
    }
}

/// Renders one labeled summary line for a span:
/// `"Single (3 available): 103-105"`.
#[must_use]
pub fn render_range_summary(catalog: &RoomCatalog, range: NumberRange, label: &str) -> String {
    let count = available_count_in_range(catalog, range);
    let runs = format_runs(&available_runs(catalog, range));
    format!("{label} ({count} available): {runs}")
}

fn is_available(catalog: &RoomCatalog, number: RoomNumber) -> bool {
    catalog
        .lookup(number)
        .map(|room| !room.is_booked())
        .unwrap_or(false)
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;
