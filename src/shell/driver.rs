//! Frame loop: detect, update, compose the status line.

use serde::Serialize;

use crate::core::Clock;
use crate::game::{ColorTag, GameSession};

use super::detector::PoseDetector;

/// One frame's worth of display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HudLine {
    /// Main status line.
    pub status: String,

    /// Color class for `status`.
    pub color: ColorTag,

    /// Running total, shown separately.
    pub total_score: u32,
}

/// Drives a `GameSession` from a `PoseDetector`.
///
/// The driver owns the detector for its whole life. Call `shutdown` to get
/// it back and release whatever it holds.
pub struct FrameDriver<D: PoseDetector, C: Clock> {
    detector: D,
    session: GameSession<C>,
}

impl<D: PoseDetector, C: Clock> FrameDriver<D, C> {
    /// Create a driver.
    pub fn new(detector: D, session: GameSession<C>) -> Self {
        Self { detector, session }
    }

    /// Process one frame.
    ///
    /// The header names the stage and target pose as they were *before*
    /// this frame, so a matching frame still names the pose just matched.
    pub fn process_frame(&mut self, frame: &D::Frame) -> HudLine {
        let mut status = format!(
            "Stage {}: {}",
            self.session.stage().number(),
            self.session.current_pose()
        );
        let mut color = ColorTag::Neutral;

        if let Some(landmarks) = self.detector.detect(frame) {
            if self.session.is_game_over() {
                status = format!(
                    "GAME OVER! Score: {} | Press 'r' to Retry",
                    self.session.total_score()
                );
                color = ColorTag::Fail;
            } else {
                let outcome = self.session.update(&landmarks);
                status.push_str(" | ");
                status.push_str(&outcome.status_text());
                color = outcome.color();
            }
        }

        HudLine {
            status,
            color,
            total_score: self.session.total_score(),
        }
    }

    /// Start over, but only once the game has ended.
    ///
    /// Returns whether the session was reset.
    pub fn retry(&mut self) -> bool {
        if !self.session.is_game_over() {
            return false;
        }
        self.session.reset();
        true
    }

    /// The session being driven.
    #[must_use]
    pub fn session(&self) -> &GameSession<C> {
        &self.session
    }

    /// Stop driving and hand back the detector and the final session.
    pub fn shutdown(self) -> (D, GameSession<C>) {
        (self.detector, self.session)
    }
}
