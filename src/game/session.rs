//! Game session controller.
//!
//! `GameSession::update` is called once per frame with a body in view. It
//! runs the countdown for the current pose, scores the frame with the
//! active matcher and either advances, keeps waiting, or ends the game.
//!
//! ## Lifecycle
//!
//! ```text
//! new/reset -> update* -> (TimeUp) -> GameOver ... -> reset
//! ```
//!
//! Once over, `update` is inert until `reset`. The session performs no
//! I/O and never blocks; callers serialize `update` and `reset`.

use std::time::{Duration, Instant};
use tracing::info;

use crate::core::{Clock, ConfigError, GameConfig, GameRng, LandmarkSet, MonotonicClock};
use crate::poses::PoseKind;

use super::progression::{Progression, Stage};
use super::status::FrameOutcome;
use super::summary::RunSummary;

/// One player's game, from start to game over.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use motion_game::core::{GameConfig, GameRng, LandmarkSet, ManualClock};
/// use motion_game::game::{FrameOutcome, GameSession};
///
/// let clock = ManualClock::new();
/// let mut session = GameSession::with_parts(GameConfig::default(), clock.clone(), GameRng::new(7));
///
/// // Nobody in the Awakening pose: the clock starts running.
/// let outcome = session.update(&LandmarkSet::new());
/// assert!(matches!(outcome, FrameOutcome::Holding { .. }));
///
/// clock.advance(Duration::from_secs(10));
/// assert_eq!(session.update(&LandmarkSet::new()), FrameOutcome::TimeUp);
/// assert!(session.is_game_over());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<C: Clock = MonotonicClock> {
    config: GameConfig,
    progression: Progression,
    rng: GameRng,
    clock: C,
    timer_start: Option<Instant>,
    total_score: u32,
    game_over: bool,
    summary: RunSummary,
}

impl GameSession<MonotonicClock> {
    /// Create a session with the default config on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a session on the system clock.
    ///
    /// Panics if `config` is invalid; use `try_new` to check first.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_clock(config, MonotonicClock)
    }
}

impl Default for GameSession<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> GameSession<C> {
    /// Create a session, validating the config.
    pub fn try_new(config: GameConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_clock(config, clock))
    }

    /// Create a session on `clock`, seeding the RNG from the config.
    ///
    /// Panics if `config` is invalid.
    #[must_use]
    pub fn with_clock(config: GameConfig, clock: C) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_parts(config, clock, rng)
    }

    /// Create a session from explicit parts.
    ///
    /// Panics if `config` is invalid.
    #[must_use]
    pub fn with_parts(config: GameConfig, clock: C, rng: GameRng) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid game config: {e}");
        }
        let summary = RunSummary::new(clock.now());
        Self {
            progression: Progression::new(config.time_limits),
            config,
            rng,
            clock,
            timer_start: None,
            total_score: 0,
            game_over: false,
            summary,
        }
    }

    // === Accessors ===

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.progression.stage()
    }

    /// The pose the player must match.
    #[must_use]
    pub fn current_pose(&self) -> PoseKind {
        self.progression.current_pose()
    }

    /// Position in the stage 1 sequence. `None` once shuffling.
    #[must_use]
    pub fn pose_index(&self) -> Option<usize> {
        self.progression.pose_index()
    }

    /// Time budget for the current pose.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.progression.time_limit_secs()
    }

    /// Seconds left on the current pose, without updating anything.
    ///
    /// The full budget while the timer is unarmed, 0 once the game is over.
    #[must_use]
    pub fn time_remaining(&self) -> f64 {
        if self.game_over {
            return 0.0;
        }
        let limit = f64::from(self.time_limit_secs());
        match self.timer_start {
            None => limit,
            Some(start) => (limit - self.elapsed_since(start).as_secs_f64()).max(0.0),
        }
    }

    /// Points accumulated this run.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Statistics for the current run.
    #[must_use]
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Time since the run started (or was reset).
    #[must_use]
    pub fn run_time(&self) -> Duration {
        self.summary.run_time(self.clock.now())
    }

    /// Seed of the shuffle RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Frame Processing ===

    /// Process one frame of landmarks.
    pub fn update(&mut self, landmarks: &LandmarkSet) -> FrameOutcome {
        if self.game_over {
            return FrameOutcome::GameOver;
        }

        let now = self.clock.now();
        let start = *self.timer_start.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);
        let remaining = f64::from(self.time_limit_secs()) - elapsed.as_secs_f64();

        if remaining <= 0.0 {
            self.game_over = true;
            info!(
                pose = %self.current_pose(),
                total_score = self.total_score,
                poses_cleared = self.summary.poses_cleared(),
                "time up, game over"
            );
            return FrameOutcome::TimeUp;
        }

        let pose = self.current_pose();
        let card = pose.evaluate(landmarks);
        let score = card.total();

        if score >= self.config.pass_threshold {
            self.total_score += score;
            self.summary.record_match(pose, score);
            info!(pose = %pose, score, total_score = self.total_score, "pose matched");

            self.progression.advance(&mut self.rng);
            self.timer_start = Some(now);
            FrameOutcome::Matched { pose, score }
        } else {
            self.summary.record_attempt(pose, score);
            FrameOutcome::Holding {
                remaining_secs: remaining,
                score,
                max_score: card.max_score(),
            }
        }
    }

    /// Restore start-of-session state.
    ///
    /// The RNG is not reseeded, so a retry sees a fresh shuffle sequence.
    pub fn reset(&mut self) {
        info!(
            total_score = self.total_score,
            was_over = self.game_over,
            "session reset"
        );
        self.progression.reset();
        self.timer_start = None;
        self.total_score = 0;
        self.game_over = false;
        self.summary = RunSummary::new(self.clock.now());
    }

    fn elapsed_since(&self, start: Instant) -> Duration {
        self.clock.now().saturating_duration_since(start)
    }
}
