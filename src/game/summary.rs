//! Per-run statistics for the game-over screen.

use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

use crate::poses::PoseKind;

/// Statistics for one run, from start (or reset) to game over.
#[derive(Clone, Debug)]
pub struct RunSummary {
    started_at: Instant,
    poses_cleared: u32,
    best_scores: FxHashMap<PoseKind, u32>,
}

impl RunSummary {
    /// Start a run at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            started_at: now,
            poses_cleared: 0,
            best_scores: FxHashMap::default(),
        }
    }

    /// Record a scored frame against `pose`.
    pub fn record_attempt(&mut self, pose: PoseKind, score: u32) {
        let best = self.best_scores.entry(pose).or_insert(0);
        *best = (*best).max(score);
    }

    /// Record a passed pose.
    pub fn record_match(&mut self, pose: PoseKind, score: u32) {
        self.record_attempt(pose, score);
        self.poses_cleared += 1;
    }

    /// Number of poses passed this run.
    #[must_use]
    pub fn poses_cleared(&self) -> u32 {
        self.poses_cleared
    }

    /// Best score seen for `pose`, if it was attempted.
    #[must_use]
    pub fn best_score(&self, pose: PoseKind) -> Option<u32> {
        self.best_scores.get(&pose).copied()
    }

    /// Best scores for every attempted pose, in pose order.
    #[must_use]
    pub fn best_scores(&self) -> Vec<(PoseKind, u32)> {
        let mut scores: Vec<_> = self.best_scores.iter().map(|(k, v)| (*k, *v)).collect();
        scores.sort_unstable();
        scores
    }

    /// Time since the run started.
    #[must_use]
    pub fn run_time(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}
