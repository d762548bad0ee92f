//! Game configuration.
//!
//! Defaults reproduce the tuned game: 10 seconds for the first pose,
//! one second less per stage 1 pose down to a 3 second floor, 3 seconds
//! per shuffle pose, and a pass mark of 6 points.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Highest score any pose can award.
pub const MAX_POSE_SCORE: u32 = 10;

/// Per-pose time budget schedule, in whole seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeLimits {
    /// Limit for the first stage 1 pose.
    pub initial_secs: u32,

    /// Reduction applied for each later stage 1 pose.
    pub step_secs: u32,

    /// Stage 1 limits never drop below this.
    pub floor_secs: u32,

    /// Limit for every stage 2 (shuffle) pose.
    pub shuffle_secs: u32,
}

impl Default for TimeLimits {
    fn default() -> Self {
        Self {
            initial_secs: 10,
            step_secs: 1,
            floor_secs: 3,
            shuffle_secs: 3,
        }
    }
}

impl TimeLimits {
    /// Limit for the stage 1 pose at `index`.
    ///
    /// ```
    /// use motion_game::core::TimeLimits;
    ///
    /// let limits = TimeLimits::default();
    /// let seq: Vec<_> = (0..9).map(|i| limits.for_sequence_index(i)).collect();
    /// assert_eq!(seq, vec![10, 9, 8, 7, 6, 5, 4, 3, 3]);
    /// ```
    #[must_use]
    pub fn for_sequence_index(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.initial_secs
            .saturating_sub(self.step_secs.saturating_mul(index))
            .max(self.floor_secs)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time budget schedule.
    pub time_limits: TimeLimits,

    /// Minimum pose score that counts as a match.
    pub pass_threshold: u32,

    /// Seed for the shuffle RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limits: TimeLimits::default(),
            pass_threshold: 6,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config and validate it.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pass threshold.
    #[must_use]
    pub fn with_pass_threshold(mut self, threshold: u32) -> Self {
        self.pass_threshold = threshold;
        self
    }

    /// Set the time budget schedule.
    #[must_use]
    pub fn with_time_limits(mut self, limits: TimeLimits) -> Self {
        self.time_limits = limits;
        self
    }

    /// Check the config describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.time_limits;
        if limits.floor_secs == 0 {
            return Err(ConfigError::ZeroFloor);
        }
        if limits.shuffle_secs == 0 {
            return Err(ConfigError::ZeroShuffleLimit);
        }
        if limits.initial_secs < limits.floor_secs {
            return Err(ConfigError::InitialBelowFloor {
                initial: limits.initial_secs,
                floor: limits.floor_secs,
            });
        }
        if self.pass_threshold == 0 || self.pass_threshold > MAX_POSE_SCORE {
            return Err(ConfigError::PassThreshold(self.pass_threshold));
        }
        Ok(())
    }
}
