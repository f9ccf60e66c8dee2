//! Multi-start clustering search.
//!
//! Runs the weighted clusterer several times with independent random
//! initializations on the shared worker pool, scores every run with the
//! composite metric and keeps the best one. Each restart owns its RNG and its
//! result; the reduction is sequential over submission order so an exact tie
//! keeps the first run encountered.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use super::quality::{balance_score, composite_score, silhouette_score};
use super::weighted::{ClusterRun, WeightedClusterer};
use crate::config::ClusteringParams;
use crate::error::EngineResult;
use crate::utils::{parallel_into_collect, ThreadPool};

/// Best clustering found by the search.
#[derive(Debug, Clone)]
pub struct ClusterSelection {
    pub centroids: Vec<[f64; 2]>,
    /// Group index per input point, in input order.
    pub assignment: Vec<usize>,
    /// Composite score of the winning run; `None` for the single-group case,
    /// which skips scoring entirely.
    pub composite: Option<f64>,
}

/// Search for the best assignment of `points` into `k` groups.
pub fn search_clusters(
    points: &[[f64; 2]],
    k: usize,
    params: &ClusteringParams,
    pool: &ThreadPool,
) -> EngineResult<ClusterSelection> {
    // a single group needs no search: centroid is the mean of all points
    if k == 1 {
        let n = points.len() as f64;
        let centroid = points
            .iter()
            .fold([0.0, 0.0], |acc, p| [acc[0] + p[0], acc[1] + p[1]]);
        return Ok(ClusterSelection {
            centroids: vec![[centroid[0] / n, centroid[1] / n]],
            assignment: vec![0; points.len()],
            composite: None,
        });
    }

    let runs: Vec<EngineResult<(ClusterRun, f64)>> = pool.execute(|| {
        parallel_into_collect((0..params.restarts.max(1)).collect(), |_restart: usize| {
            let mut rng = SmallRng::from_entropy();
            let run = WeightedClusterer::new(points, params).run(k, &mut rng)?;
            let silhouette = silhouette_score(points, &run.assignment, k);
            let balance = balance_score(&run.assignment, k);
            Ok((run, composite_score(silhouette, balance)))
        })
    });

    // first-maximal-wins reduction; a failed restart fails the whole phase,
    // after every sibling result has been collected
    let mut best: Option<(ClusterRun, f64)> = None;
    for result in runs {
        let (run, score) = result?;
        match &best {
            Some((_, best_score)) if score <= *best_score => {}
            _ => best = Some((run, score)),
        }
    }

    let (run, score) = best.expect("at least one clustering restart must run");
    debug!(k, restarts = params.restarts, composite = score, "clustering search finished");

    Ok(ClusterSelection {
        centroids: run.centroids,
        assignment: run.assignment,
        composite: Some(score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> ThreadPool {
        ThreadPool::new(4)
    }

    #[test]
    fn test_single_group_uses_mean_centroid() {
        // three collinear points, no scoring involved
        let points = vec![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]];
        let selection =
            search_clusters(&points, 1, &ClusteringParams::default(), &pool()).unwrap();

        assert_eq!(selection.assignment, vec![0, 0, 0]);
        assert_eq!(selection.centroids.len(), 1);
        assert!((selection.centroids[0][0] - 0.5).abs() < 1e-9);
        assert!((selection.centroids[0][1] - 0.5).abs() < 1e-9);
        assert!(selection.composite.is_none());
    }

    #[test]
    fn test_search_partitions_points() {
        let points = vec![
            [0.0, 0.0],
            [0.05, 0.0],
            [0.0, 0.05],
            [1.0, 1.0],
            [0.95, 1.0],
            [1.0, 0.95],
        ];
        let selection =
            search_clusters(&points, 2, &ClusteringParams::default(), &pool()).unwrap();

        assert_eq!(selection.assignment.len(), points.len());
        assert!(selection.assignment.iter().all(|&g| g < 2));
        assert!(selection.composite.is_some());
    }

    #[test]
    fn test_search_separates_distant_blobs() {
        let points = vec![
            [0.0, 0.0],
            [0.01, 0.0],
            [0.0, 0.01],
            [1.0, 1.0],
            [0.99, 1.0],
            [1.0, 0.99],
        ];
        let selection =
            search_clusters(&points, 2, &ClusteringParams::default(), &pool()).unwrap();

        // all points of a blob end up in the same group
        assert_eq!(selection.assignment[0], selection.assignment[1]);
        assert_eq!(selection.assignment[0], selection.assignment[2]);
        assert_eq!(selection.assignment[3], selection.assignment[4]);
        assert_eq!(selection.assignment[3], selection.assignment[5]);
        assert_ne!(selection.assignment[0], selection.assignment[3]);
    }

    #[test]
    fn test_search_propagates_configuration_error() {
        let points = vec![[0.5, 0.5]; 4];
        let result = search_clusters(&points, 2, &ClusteringParams::default(), &pool());
        assert!(result.is_err());
    }
}
