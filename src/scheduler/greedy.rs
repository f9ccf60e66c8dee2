//! Greedy, priority-driven scheduler for one group of locations.
//!
//! A single pass over the candidate list: the first pick is the location with
//! the earliest opening time; every following pick minimizes a score balancing
//! proximity to the last visit with business-hours compatibility. A candidate that the
//! placement procedure cannot fit goes to the unvisitable list and is not
//! retried within the pass.

use tracing::trace;

use super::placement::try_place;
use crate::models::{DailyWindow, GroupResult, Location, ScheduleEntry, TimeOfDay};
use crate::utils::haversine_km;

pub const FIRST_PICK_REASON: &str = "Chosen as the first location based on earliest opening hours";

/// Minimum remaining-hours value in the priority score; keeps the urgency term
/// bounded once a location's closing time has already passed.
const MIN_FLEXIBILITY_HOURS: f64 = 0.1;

/// Schedule as many of the given locations as possible. Consumes the
/// candidate list; callers keep their own copy when they need to retry.
pub fn schedule_group(mut candidates: Vec<Location>, window: &DailyWindow) -> GroupResult {
    let mut result = GroupResult::default();
    let mut current_time = window.start;
    let mut last_coordinates: Option<[f64; 2]> = None;

    while !candidates.is_empty() {
        let (index, reason) = match last_coordinates {
            None => (earliest_opening(&candidates), FIRST_PICK_REASON.to_string()),
            Some(last) => {
                let index = best_scored(&candidates, last, current_time);
                let distance = haversine_km(last, candidates[index].coordinates);
                (
                    index,
                    format!(
                        "Chosen based on proximity ({:.2} km) and business hours compatibility",
                        distance
                    ),
                )
            }
        };

        let candidate = candidates.remove(index);
        match try_place(&candidate, &result.schedule, window) {
            Some((start, end)) => {
                trace!(name = %candidate.name, %start, %end, "placed");
                result.insert_sorted(ScheduleEntry::new(&candidate, start, end).with_reason(reason));
                current_time = end;
                last_coordinates = Some(candidate.coordinates);
            }
            None => {
                trace!(name = %candidate.name, "no fit, marking unvisitable");
                result.unvisitable.push(candidate);
            }
        }
    }

    annotate_proximity(&mut result.schedule);
    result
}

/// Index of the candidate with the earliest opening time; first wins on ties.
fn earliest_opening(candidates: &[Location]) -> usize {
    let mut best = 0;
    for (index, candidate) in candidates.iter().enumerate().skip(1) {
        if candidate.opening_hours < candidates[best].opening_hours {
            best = index;
        }
    }
    best
}

/// Index of the candidate minimizing `distance + 1/flexibility`, where
/// flexibility is the hours left until the candidate closes. Lower is better;
/// first wins on ties.
fn best_scored(candidates: &[Location], last: [f64; 2], current_time: TimeOfDay) -> usize {
    let mut best = 0;
    let mut best_score = f64::INFINITY;
    for (index, candidate) in candidates.iter().enumerate() {
        let score = priority_score(candidate, last, current_time);
        if score < best_score {
            best = index;
            best_score = score;
        }
    }
    best
}

fn priority_score(candidate: &Location, last: [f64; 2], current_time: TimeOfDay) -> f64 {
    let proximity = haversine_km(last, candidate.coordinates);
    let flexibility = candidate
        .closing_hours
        .hours_since(current_time)
        .max(MIN_FLEXIBILITY_HOURS);
    proximity + 1.0 / flexibility
}

/// Annotate each entry with the distance to the next one; the last entry of a
/// schedule carries no annotation.
fn annotate_proximity(schedule: &mut [ScheduleEntry]) {
    for i in 0..schedule.len().saturating_sub(1) {
        let distance = haversine_km(schedule[i].coordinates, schedule[i + 1].coordinates);
        schedule[i].proximity_to_next = Some(format!("{:.2} km", distance));
    }
}
