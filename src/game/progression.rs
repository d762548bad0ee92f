//! Stage and pose progression.
//!
//! ```text
//! Sequential(0) -> Sequential(1) -> ... -> Sequential(7) -> Shuffle -> Shuffle -> ...
//! ```
//!
//! Stage 1 walks the eight poses in order with a shrinking time budget.
//! Stage 2 draws each next pose uniformly from all eight, with
//! replacement, under a fixed budget. The timer itself lives in the
//! session; every `advance()` is followed by a timer re-arm there.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, TimeLimits};
use crate::poses::PoseKind;

/// Coarse game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Stage 1: fixed pose order.
    Sequential,
    /// Stage 2: random draws.
    Shuffle,
}

impl Stage {
    /// 1-based stage number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Stage::Sequential => 1,
            Stage::Shuffle => 2,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stage {}", self.number())
    }
}

/// Result of one `advance()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the next stage 1 pose.
    Next { pose: PoseKind, time_limit_secs: u32 },
    /// Finished stage 1 and drew the first shuffle pose.
    EnteredShuffle { pose: PoseKind },
    /// Drew another shuffle pose.
    Shuffled { pose: PoseKind },
}

impl Transition {
    /// The pose now active.
    #[must_use]
    pub const fn pose(&self) -> PoseKind {
        match self {
            Transition::Next { pose, .. }
            | Transition::EnteredShuffle { pose }
            | Transition::Shuffled { pose } => *pose,
        }
    }
}

/// Stage / pose state machine.
#[derive(Clone, Debug)]
pub struct Progression {
    limits: TimeLimits,
    stage: Stage,
    pose_index: usize,
    time_limit_secs: u32,
    current: PoseKind,
}

impl Progression {
    /// Start at stage 1, first pose.
    #[must_use]
    pub fn new(limits: TimeLimits) -> Self {
        Self {
            limits,
            stage: Stage::Sequential,
            pose_index: 0,
            time_limit_secs: limits.for_sequence_index(0),
            current: PoseKind::ALL[0],
        }
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Position in the stage 1 sequence. `None` once shuffling.
    #[must_use]
    pub fn pose_index(&self) -> Option<usize> {
        match self.stage {
            Stage::Sequential => Some(self.pose_index),
            Stage::Shuffle => None,
        }
    }

    /// Time budget for the current pose.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// The pose the player must match.
    #[must_use]
    pub fn current_pose(&self) -> PoseKind {
        self.current
    }

    /// Move to the next pose.
    pub fn advance(&mut self, rng: &mut GameRng) -> Transition {
        let transition = match self.stage {
            Stage::Sequential => {
                self.pose_index += 1;
                match PoseKind::from_index(self.pose_index) {
                    Some(pose) => {
                        self.time_limit_secs = self.limits.for_sequence_index(self.pose_index);
                        self.current = pose;
                        Transition::Next {
                            pose,
                            time_limit_secs: self.time_limit_secs,
                        }
                    }
                    None => {
                        self.stage = Stage::Shuffle;
                        self.time_limit_secs = self.limits.shuffle_secs;
                        self.current = draw(rng);
                        info!(
                            pose = %self.current,
                            time_limit_secs = self.time_limit_secs,
                            "entering stage 2 shuffle"
                        );
                        Transition::EnteredShuffle { pose: self.current }
                    }
                }
            }
            Stage::Shuffle => {
                self.current = draw(rng);
                Transition::Shuffled { pose: self.current }
            }
        };

        debug!(
            stage = self.stage.number(),
            pose = %self.current,
            time_limit_secs = self.time_limit_secs,
            "advanced"
        );
        transition
    }

    /// Back to stage 1, first pose.
    pub fn reset(&mut self) {
        *self = Self::new(self.limits);
    }
}

fn draw(rng: &mut GameRng) -> PoseKind {
    PoseKind::ALL[rng.gen_range_usize(0..PoseKind::ALL.len())]
}
