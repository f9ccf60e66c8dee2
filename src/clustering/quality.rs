//! Quality metrics used to rank clustering restarts.

use super::weighted::euclidean;

const COHESION_WEIGHT: f64 = 0.7;
const BALANCE_WEIGHT: f64 = 0.3;

/// Mean silhouette coefficient over all points.
///
/// For a point in a singleton group, or when no other non-empty group exists,
/// the coefficient is 0.
pub fn silhouette_score(points: &[[f64; 2]], assignment: &[usize], k: usize) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    let sizes = group_sizes(assignment, k);

    let total: f64 = points
        .iter()
        .zip(assignment)
        .map(|(point, &own)| {
            if sizes[own] <= 1 {
                return 0.0;
            }

            // mean distance to the other members of the point's own group
            let intra: f64 = points
                .iter()
                .zip(assignment)
                .filter(|(other, &g)| g == own && !std::ptr::eq(*other, point))
                .map(|(other, _)| euclidean(*point, *other))
                .sum::<f64>()
                / (sizes[own] - 1) as f64;

            // smallest mean distance to any other non-empty group
            let nearest = (0..k)
                .filter(|&g| g != own && sizes[g] > 0)
                .map(|g| {
                    points
                        .iter()
                        .zip(assignment)
                        .filter(|(_, &a)| a == g)
                        .map(|(other, _)| euclidean(*point, *other))
                        .sum::<f64>()
                        / sizes[g] as f64
                })
                .fold(f64::INFINITY, f64::min);

            if !nearest.is_finite() {
                return 0.0;
            }

            let denom = intra.max(nearest);
            if denom == 0.0 {
                0.0
            } else {
                (nearest - intra) / denom
            }
        })
        .sum();

    total / points.len() as f64
}

/// Group-size balance: population variance of the sizes over their mean.
/// Zero means perfectly balanced groups; lower is better.
pub fn balance_score(assignment: &[usize], k: usize) -> f64 {
    let sizes = group_sizes(assignment, k);
    let mean = assignment.len() as f64 / k as f64;
    if mean == 0.0 {
        return 0.0;
    }

    let variance = sizes
        .iter()
        .map(|&size| (size as f64 - mean).powi(2))
        .sum::<f64>()
        / k as f64;

    variance / mean
}

/// Composite used to rank restarts: cohesion/separation dominates, with a
/// smaller reward for balanced group sizes.
pub fn composite_score(silhouette: f64, balance: f64) -> f64 {
    COHESION_WEIGHT * silhouette + BALANCE_WEIGHT * (1.0 - balance)
}

fn group_sizes(assignment: &[usize], k: usize) -> Vec<usize> {
    let mut sizes = vec![0usize; k];
    for &group in assignment {
        sizes[group] += 1;
    }
    sizes
}
