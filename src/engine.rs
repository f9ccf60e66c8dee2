//! Pipeline orchestration.
//!
//! Validates the request, normalizes coordinates, searches for the best
//! grouping, schedules every group concurrently and finally runs the rescue
//! pass. The two concurrent phases are separated by full barriers: grouping is
//! final before any scheduling starts, and all scheduling attempts finish
//! before the rescue pass touches the schedules.

use tracing::{debug, info};

use crate::api::PlanRequest;
use crate::clustering::{normalize, search_clusters};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyWindow, GroupResult, Location};
use crate::scheduler::{rescue_unvisitable, search_schedules};
use crate::utils::ThreadPool;

/// Final product of the pipeline.
///
/// `groups` hold the per-group ordered schedules; `unvisitable` lists the
/// locations no group could fit even after the rescue pass. Centroids and the
/// composite score are internal by-products kept for collaborators such as
/// visualization layers.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub groups: Vec<GroupResult>,
    pub unvisitable: Vec<Location>,
    pub centroids: Vec<[f64; 2]>,
    pub composite_score: Option<f64>,
}

/// Run the full planning pipeline for one request.
pub fn plan(request: &PlanRequest, config: &EngineConfig) -> EngineResult<PlanOutcome> {
    validate(request)?;

    let k = request.num_groups;
    let window = DailyWindow::new(request.daily_start_time, request.daily_end_time);
    let pool = ThreadPool::new(config.workers);

    let coordinates: Vec<[f64; 2]> = request.points.iter().map(|p| p.coordinates).collect();
    let normalized = normalize(&coordinates);

    // phase 1: grouping; all restarts complete before assignment is final
    let selection = search_clusters(&normalized, k, &config.clustering, &pool)?;

    let mut groups: Vec<Vec<Location>> = vec![Vec::new(); k];
    for (location, &group) in request.points.iter().zip(&selection.assignment) {
        groups[group].push(location.clone());
    }
    debug!(
        sizes = ?groups.iter().map(Vec::len).collect::<Vec<_>>(),
        "group assignment fixed"
    );

    // phase 2: per-group scheduling behind the barrier
    let mut results = search_schedules(groups, window, &config.scheduling, &pool);

    // phase 3: sequential rescue over the union of leftovers, in group order
    let leftovers: Vec<Location> = results
        .iter_mut()
        .flat_map(|result| result.unvisitable.drain(..))
        .collect();
    let leftover_count = leftovers.len();
    let unvisitable = rescue_unvisitable(leftovers, &mut results, &window);

    info!(
        locations = request.points.len(),
        groups = k,
        scheduled = results.iter().map(|r| r.schedule.len()).sum::<usize>(),
        rescued = leftover_count - unvisitable.len(),
        unvisitable = unvisitable.len(),
        "plan complete"
    );

    Ok(PlanOutcome {
        groups: results,
        unvisitable,
        centroids: selection.centroids,
        composite_score: selection.composite,
    })
}

fn validate(request: &PlanRequest) -> EngineResult<()> {
    if request.num_groups < 1 {
        return Err(EngineError::invalid_configuration(
            "number of groups must be at least 1",
        ));
    }
    if request.num_groups > request.points.len() {
        return Err(EngineError::invalid_configuration(format!(
            "number of groups ({}) cannot exceed number of locations ({})",
            request.num_groups,
            request.points.len()
        )));
    }
    Ok(())
}
