//! Soft-penalty weighted k-means.
//!
//! One clustering run over normalized coordinates. Points far from their
//! centroid get a decaying weight in the centroid update, so outliers pull
//! centroids less without being discarded. The run always consumes its full
//! iteration budget; there is no convergence check.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ClusteringParams;
use crate::error::{EngineError, EngineResult};

/// Centroids and point-to-group assignment produced by one clustering run.
#[derive(Debug, Clone)]
pub struct ClusterRun {
    pub centroids: Vec<[f64; 2]>,
    /// Group index per input point, in input order. Values are in `0..k`.
    pub assignment: Vec<usize>,
}

/// One run of soft-penalty weighted k-means.
pub struct WeightedClusterer<'a> {
    points: &'a [[f64; 2]],
    params: &'a ClusteringParams,
}

impl<'a> WeightedClusterer<'a> {
    pub fn new(points: &'a [[f64; 2]], params: &'a ClusteringParams) -> Self {
        Self { points, params }
    }

    /// Run the full iteration budget and return the final centroids and
    /// assignment. Fails when `k` exceeds the number of distinct points.
    pub fn run<R: Rng>(&self, k: usize, rng: &mut R) -> EngineResult<ClusterRun> {
        let mut centroids = self.initial_centroids(k, rng)?;

        // full fixed budget, assignment then update, no convergence check
        let mut assignment = assign_points(self.points, &centroids);
        for _ in 0..self.params.iterations {
            assignment = assign_points(self.points, &centroids);
            update_centroids(self.points, &assignment, &mut centroids, self.params);
        }

        Ok(ClusterRun {
            centroids,
            assignment,
        })
    }

    /// Sample `k` distinct points uniformly at random, without replacement.
    fn initial_centroids<R: Rng>(&self, k: usize, rng: &mut R) -> EngineResult<Vec<[f64; 2]>> {
        let mut distinct: Vec<[f64; 2]> = Vec::new();
        for point in self.points {
            if !distinct.contains(point) {
                distinct.push(*point);
            }
        }

        if distinct.len() < k {
            return Err(EngineError::invalid_configuration(format!(
                "requested {} groups but only {} distinct points are available",
                k,
                distinct.len()
            )));
        }

        Ok(distinct.choose_multiple(rng, k).copied().collect())
    }
}

/// Assign every point to its nearest centroid; ties break to the lowest index.
fn assign_points(points: &[[f64; 2]], centroids: &[[f64; 2]]) -> Vec<usize> {
    points
        .iter()
        .map(|point| {
            let mut best = 0;
            let mut best_distance = f64::INFINITY;
            for (index, centroid) in centroids.iter().enumerate() {
                let distance = euclidean(*point, *centroid);
                if distance < best_distance {
                    best = index;
                    best_distance = distance;
                }
            }
            best
        })
        .collect()
}

/// Weighted centroid update. A group with no members keeps its centroid.
pub(crate) fn update_centroids(
    points: &[[f64; 2]],
    assignment: &[usize],
    centroids: &mut [[f64; 2]],
    params: &ClusteringParams,
) {
    for (group, centroid) in centroids.iter_mut().enumerate() {
        let mut weighted = [0.0, 0.0];
        let mut weight_sum = 0.0;
        let mut members = 0;

        for (point, &assigned) in points.iter().zip(assignment) {
            if assigned != group {
                continue;
            }
            members += 1;
            let weight = soft_weight(
                euclidean(*point, *centroid),
                params.penalty_threshold,
                params.penalty_factor,
            );
            weighted[0] += point[0] * weight;
            weighted[1] += point[1] * weight;
            weight_sum += weight;
        }

        if members > 0 {
            // weight floor keeps the sum strictly positive
            *centroid = [weighted[0] / weight_sum, weighted[1] / weight_sum];
        }
    }
}

/// Per-point weight in the centroid update: decays past the distance
/// threshold, floored at 0.01 so the weight sum never reaches zero.
pub(crate) fn soft_weight(distance: f64, threshold: f64, factor: f64) -> f64 {
    (1.0 - factor * (distance - threshold).max(0.0)).max(0.01)
}

pub(crate) fn euclidean(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn params() -> ClusteringParams {
        ClusteringParams::default()
    }

    #[test]
    fn test_soft_weight_floor() {
        let p = params();
        for distance in [0.0, 0.1, 0.3, 1.0, 10.0, 1e6] {
            let w = soft_weight(distance, p.penalty_threshold, p.penalty_factor);
            assert!(w >= 0.01, "weight {} below floor for distance {}", w, distance);
            assert!(w <= 1.0);
        }
        // inside the threshold the weight stays at 1
        assert_eq!(soft_weight(0.2, 0.3, 0.5), 1.0);
    }

    #[test]
    fn test_run_partitions_all_points() {
        let points = vec![
            [0.0, 0.0],
            [0.1, 0.0],
            [0.0, 0.1],
            [1.0, 1.0],
            [0.9, 1.0],
            [1.0, 0.9],
        ];
        let p = params();
        let mut rng = SmallRng::seed_from_u64(7);
        let run = WeightedClusterer::new(&points, &p).run(2, &mut rng).unwrap();

        assert_eq!(run.assignment.len(), points.len());
        assert_eq!(run.centroids.len(), 2);
        assert!(run.assignment.iter().all(|&g| g < 2));
    }

    #[test]
    fn test_too_few_distinct_points() {
        let points = vec![[0.5, 0.5], [0.5, 0.5], [0.5, 0.5]];
        let p = params();
        let mut rng = SmallRng::seed_from_u64(1);
        let err = WeightedClusterer::new(&points, &p).run(2, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            crate::error::EngineError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_empty_group_keeps_centroid() {
        let points = vec![[0.0, 0.0], [0.2, 0.0]];
        let assignment = vec![0, 0];
        let mut centroids = [[0.1, 0.0], [5.0, 5.0]];
        update_centroids(&points, &assignment, &mut centroids, &params());

        assert_eq!(centroids[1], [5.0, 5.0]);
        assert!((centroids[0][0] - 0.1).abs() < 1e-9);
    }
}
