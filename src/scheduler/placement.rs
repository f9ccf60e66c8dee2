//! Shared placement procedure.
//!
//! Decides whether and where a location fits into an ordered, non-overlapping
//! schedule under the daily window and the location's own opening hours. The
//! scan is first-fit, left to right: before the first entry, then into each
//! gap between consecutive entries, then after the last entry. Both the greedy
//! scheduler and the rescue pass go through this single procedure.

use crate::models::{DailyWindow, Location, ScheduleEntry, TimeOfDay};

/// Try to fit `location` into `schedule`. Returns the chosen start/end pair,
/// or `None` when no slot fits.
pub fn try_place(
    location: &Location,
    schedule: &[ScheduleEntry],
    window: &DailyWindow,
) -> Option<(TimeOfDay, TimeOfDay)> {
    let start = window.start.max(location.opening_hours);
    let end = start.add_hours(location.duration);
    let latest_end = window.end.min(location.closing_hours);

    if end > latest_end {
        return None;
    }

    for (index, entry) in schedule.iter().enumerate() {
        // before the first entry
        if index == 0 && end <= entry.start_time {
            return Some((start, end));
        }

        // into the gap after the previous entry
        if index > 0 {
            let previous_end = schedule[index - 1].end_time;
            let gap_end = previous_end.add_hours(location.duration);
            if gap_end <= entry.start_time {
                return Some((previous_end, gap_end));
            }
        }
    }

    // after the last entry
    if let Some(last) = schedule.last() {
        let tail_start = last.end_time;
        let tail_end = tail_start.add_hours(location.duration);
        if tail_end <= latest_end {
            return Some((tail_start, tail_end));
        }
        return None;
    }

    // empty schedule: the step-1 slot already satisfies the bound
    Some((start, end))
}
