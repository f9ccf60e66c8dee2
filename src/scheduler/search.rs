//! Per-group multi-start scheduling search.
//!
//! Every group runs up to a bounded number of greedy attempts and keeps the
//! one with the fewest unvisitable locations, tie-broken by the longer
//! schedule. Attempt 0 uses the candidate list as given so a feasible input
//! order stays reproducible; later attempts shuffle the list to actually
//! diversify the search. Groups are scheduled concurrently on the shared
//! worker pool; every attempt works on a private copy of the group's list.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::greedy::schedule_group;
use crate::config::SchedulingParams;
use crate::models::{DailyWindow, GroupResult, Location};
use crate::utils::{parallel_into_collect, ThreadPool};

/// Weight that makes the unvisitable count dominate the attempt score.
const UNVISITABLE_PENALTY: i64 = 1000;

/// Schedule all groups concurrently, returning one result per group in group
/// order.
pub fn search_schedules(
    groups: Vec<Vec<Location>>,
    window: DailyWindow,
    params: &SchedulingParams,
    pool: &ThreadPool,
) -> Vec<GroupResult> {
    pool.execute(|| {
        parallel_into_collect(groups, |group| best_schedule_for_group(group, &window, params))
    })
}

/// Lower is better: fewer unvisitable locations dominate, then longer
/// schedules win.
fn attempt_score(result: &GroupResult) -> i64 {
    result.unvisitable.len() as i64 * UNVISITABLE_PENALTY - result.schedule.len() as i64
}

fn best_schedule_for_group(
    group: Vec<Location>,
    window: &DailyWindow,
    params: &SchedulingParams,
) -> GroupResult {
    let mut rng = SmallRng::from_entropy();
    let mut best: Option<(i64, GroupResult)> = None;

    for attempt in 0..params.max_attempts.max(1) {
        let mut candidates = group.clone();
        if attempt > 0 {
            candidates.shuffle(&mut rng);
        }

        let result = schedule_group(candidates, window);
        let score = attempt_score(&result);
        let complete = result.unvisitable.is_empty();

        if best.as_ref().map_or(true, |(s, _)| score < *s) {
            best = Some((score, result));
        }

        if complete {
            break;
        }
    }

    let (score, result) = best.expect("at least one scheduling attempt must run");
    debug!(
        scheduled = result.schedule.len(),
        unvisitable = result.unvisitable.len(),
        score,
        "group scheduling search finished"
    );
    result
}
