//! Host-boundary errors.
//!
//! Scoring and progression never fail. These errors only arise where the
//! host hands data to the engine: building a landmark set from detector
//! output, or loading a configuration.

use thiserror::Error;

/// Invalid landmark data from a detector or array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandmarkError {
    #[error("expected {expected} landmarks, got {actual}")]
    Count { expected: usize, actual: usize },
}

/// Invalid game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("time limit floor must be at least 1 second")]
    ZeroFloor,

    #[error("shuffle time limit must be at least 1 second")]
    ZeroShuffleLimit,

    #[error("initial time limit {initial}s is below the floor {floor}s")]
    InitialBelowFloor { initial: u32, floor: u32 },

    #[error("pass threshold {0} is outside 1..=10")]
    PassThreshold(u32),

    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
