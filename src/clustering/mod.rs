//! Grouping of locations via soft-penalty weighted k-means, searched over
//! multiple random restarts and ranked by a composite quality score.

pub mod quality;
pub mod search;
pub mod weighted;

pub use search::{search_clusters, ClusterSelection};
pub use weighted::{ClusterRun, WeightedClusterer};

/// Min-max normalize coordinates per axis into `[0, 1]`.
/// An axis with zero range maps to 0.0 for every point.
pub fn normalize(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for point in points {
        for axis in 0..2 {
            min[axis] = min[axis].min(point[axis]);
            max[axis] = max[axis].max(point[axis]);
        }
    }

    points
        .iter()
        .map(|point| {
            let mut scaled = [0.0; 2];
            for axis in 0..2 {
                let range = max[axis] - min[axis];
                if range > 0.0 {
                    scaled[axis] = (point[axis] - min[axis]) / range;
                }
            }
            scaled
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn test_normalize_scales_to_unit_square() {
        let scaled = normalize(&[[10.0, -5.0], [20.0, 5.0], [15.0, 0.0]]);
        assert_eq!(scaled[0], [0.0, 0.0]);
        assert_eq!(scaled[1], [1.0, 1.0]);
        assert_eq!(scaled[2], [0.5, 0.5]);
    }

    #[test]
    fn test_normalize_degenerate_axis() {
        let scaled = normalize(&[[3.0, 1.0], [3.0, 2.0]]);
        assert_eq!(scaled[0][0], 0.0);
        assert_eq!(scaled[1][0], 0.0);
        assert_eq!(scaled[0][1], 0.0);
        assert_eq!(scaled[1][1], 1.0);
    }
}
