//! Cross-group rescue pass.
//!
//! After every group has its best schedule, the leftovers of all groups get
//! one last chance: each is tried against every group's schedule in group-id
//! order and inserted into the first one with a fitting slot. The pass reads
//! and writes across all groups, so it runs strictly sequentially after the
//! scheduling barrier.

use tracing::debug;

use super::placement::try_place;
use crate::models::{DailyWindow, GroupResult, Location, ScheduleEntry};

/// Reason attached to locations that no group can fit.
pub const UNVISITABLE_REASON: &str = "Time constraints prevent scheduling";

/// Try to fit each leftover location, in original order, into any group's
/// schedule. Returns the locations that remain unvisitable.
pub fn rescue_unvisitable(
    leftovers: Vec<Location>,
    groups: &mut [GroupResult],
    window: &DailyWindow,
) -> Vec<Location> {
    let mut unvisitable = Vec::new();

    for location in leftovers {
        let placed = groups.iter_mut().any(|group| {
            if let Some((start, end)) = try_place(&location, &group.schedule, window) {
                group.insert_sorted(ScheduleEntry::new(&location, start, end));
                true
            } else {
                false
            }
        });

        if !placed {
            debug!(name = %location.name, "rescue failed");
            unvisitable.push(location);
        }
    }

    unvisitable
}
