//! Immutable parameter bundles for the engine.
//!
//! All knobs are passed explicitly into the components rather than baked into
//! function signatures, so callers can tune restart counts and penalties per
//! request without touching defaults elsewhere.

use serde::{Deserialize, Serialize};

/// Parameters of the soft-penalty weighted clustering search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringParams {
    /// Number of independent clustering restarts to score.
    #[serde(default = "default_restarts")]
    pub restarts: usize,
    /// Fixed iteration budget per run; no early-convergence check.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Distance beyond which the centroid-update weight starts to decay.
    #[serde(default = "default_penalty_threshold")]
    pub penalty_threshold: f64,
    /// Decay rate of the weight past the threshold.
    #[serde(default = "default_penalty_factor")]
    pub penalty_factor: f64,
}

fn default_restarts() -> usize {
    10
}

fn default_iterations() -> usize {
    100
}

fn default_penalty_threshold() -> f64 {
    0.3
}

fn default_penalty_factor() -> f64 {
    0.5
}

impl Default for ClusteringParams {
    fn default() -> Self {
        Self {
            restarts: default_restarts(),
            iterations: default_iterations(),
            penalty_threshold: default_penalty_threshold(),
            penalty_factor: default_penalty_factor(),
        }
    }
}

/// Parameters of the per-group scheduling search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingParams {
    /// Upper bound on scheduling attempts per group; the search stops early on
    /// the first attempt with zero unvisitable locations.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_max_attempts() -> usize {
    20
}

impl Default for SchedulingParams {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub clustering: ClusteringParams,
    #[serde(default)]
    pub scheduling: SchedulingParams,
    /// Size of the worker pool shared by the clustering and scheduling phases.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_workers() -> usize {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clustering: ClusteringParams::default(),
            scheduling: SchedulingParams::default(),
            workers: default_workers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.clustering.restarts, 10);
        assert_eq!(config.clustering.iterations, 100);
        assert_eq!(config.clustering.penalty_threshold, 0.3);
        assert_eq!(config.clustering.penalty_factor, 0.5);
        assert_eq!(config.scheduling.max_attempts, 20);
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"clustering": {"restarts": 3}, "workers": 2}"#).unwrap();
        assert_eq!(config.clustering.restarts, 3);
        assert_eq!(config.clustering.iterations, 100);
        assert_eq!(config.workers, 2);
    }
}
