//! Frame-level status reported to the display shell.

use serde::{Deserialize, Serialize};

use crate::poses::PoseKind;

/// Color class for a status line. Shells map it to real colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    /// Idle / informational.
    Neutral,
    /// Pose in progress, clock running.
    Warn,
    /// Pose matched.
    Success,
    /// Game over.
    Fail,
}

impl ColorTag {
    /// Suggested RGB color.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTag::Neutral => (255, 255, 255),
            ColorTag::Warn => (255, 165, 0),
            ColorTag::Success => (0, 255, 0),
            ColorTag::Fail => (255, 0, 0),
        }
    }

    /// Lowercase name, for shells that key styles by string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorTag::Neutral => "neutral",
            ColorTag::Warn => "warn",
            ColorTag::Success => "success",
            ColorTag::Fail => "fail",
        }
    }
}

/// What happened on one `update()` call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum FrameOutcome {
    /// The game had already ended; nothing was evaluated.
    GameOver,

    /// The pose timer ran out on this frame. The game is now over.
    TimeUp,

    /// The current pose scored at or above the pass threshold.
    Matched { pose: PoseKind, score: u32 },

    /// Still holding for the current pose.
    Holding {
        remaining_secs: f64,
        score: u32,
        max_score: u32,
    },
}

impl FrameOutcome {
    /// Status line text.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            FrameOutcome::GameOver => "GAME OVER".to_string(),
            FrameOutcome::TimeUp => "TIME'S UP! GAME OVER".to_string(),
            FrameOutcome::Matched { score, .. } => format!("MATCH! +{score} pts"),
            FrameOutcome::Holding {
                remaining_secs,
                score,
                max_score,
            } => format!("Time: {remaining_secs:.1}s | Score: {score}/{max_score}"),
        }
    }

    /// Color class for the status line.
    #[must_use]
    pub const fn color(&self) -> ColorTag {
        match self {
            FrameOutcome::GameOver | FrameOutcome::TimeUp => ColorTag::Fail,
            FrameOutcome::Matched { .. } => ColorTag::Success,
            FrameOutcome::Holding { .. } => ColorTag::Warn,
        }
    }

    /// Points added to the total on this frame.
    #[must_use]
    pub const fn score_delta(&self) -> u32 {
        match self {
            FrameOutcome::Matched { score, .. } => *score,
            _ => 0,
        }
    }

    /// Is the game over after this frame?
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, FrameOutcome::GameOver | FrameOutcome::TimeUp)
    }
}

impl std::fmt::Display for FrameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.status_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_texts() {
        assert_eq!(FrameOutcome::GameOver.status_text(), "GAME OVER");
        assert_eq!(FrameOutcome::TimeUp.status_text(), "TIME'S UP! GAME OVER");
        assert_eq!(
            FrameOutcome::Matched {
                pose: PoseKind::Archer,
                score: 8
            }
            .to_string(),
            "MATCH! +8 pts"
        );
        assert_eq!(
            FrameOutcome::Holding {
                remaining_secs: 4.26,
                score: 3,
                max_score: 10
            }
            .status_text(),
            "Time: 4.3s | Score: 3/10"
        );
    }

    #[test]
    fn test_colors_and_delta() {
        let matched = FrameOutcome::Matched {
            pose: PoseKind::Awakening,
            score: 10,
        };
        assert_eq!(matched.color(), ColorTag::Success);
        assert_eq!(matched.score_delta(), 10);
        assert!(!matched.is_terminal());

        assert_eq!(FrameOutcome::TimeUp.color(), ColorTag::Fail);
        assert_eq!(FrameOutcome::GameOver.score_delta(), 0);
        assert!(FrameOutcome::GameOver.is_terminal());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(ColorTag::Warn.name(), "warn");
        assert_eq!(ColorTag::Fail.rgb(), (255, 0, 0));
    }
}
