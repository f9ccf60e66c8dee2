//! Error types for the planning engine.

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for the planning engine.
///
/// Per-location placement failures and empty groups during clustering are
/// normal outcomes reflected in the output data, never errors. Only broken
/// configuration and unexpected faults inside a concurrent phase surface here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The request parameters cannot produce any valid plan.
    /// Fatal for the request; no partial result is produced.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A concurrent restart or attempt failed unexpectedly.
    #[error("Phase failure: {0}")]
    PhaseFailure(String),
}

impl EngineError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a phase failure error.
    pub fn phase_failure(message: impl Into<String>) -> Self {
        Self::PhaseFailure(message.into())
    }
}
