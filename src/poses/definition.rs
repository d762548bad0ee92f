//! Pose definitions - the static catalogue of target poses.
//!
//! `PoseKind` is the tagged variant for the eight poses. Its declaration
//! order is the stage 1 sequence. Each kind dispatches to its matcher in
//! `PoseKind::evaluate`.

use serde::{Deserialize, Serialize};

use crate::core::LandmarkSet;

use super::matchers;
use super::scorecard::Scorecard;

/// One of the eight target poses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoseKind {
    /// Arms overhead, hands together.
    Awakening,
    /// One arm straight, the other drawn back.
    Archer,
    /// Wide squat, hands hanging together.
    IronSumo,
    /// One arm high, the other hand on the hip.
    DiscoDiagonal,
    /// One-leg balance, arms out, hands pointing down.
    GoldenRooster,
    /// Tight crouch.
    ShellDefence,
    /// Side lunge, one hand down, one hand up.
    NinjaGroundTap,
    /// Arms and legs spread in an X.
    SupernovaX,
}

impl PoseKind {
    /// All poses in stage 1 order. Also the stage 2 draw pool.
    pub const ALL: [PoseKind; 8] = [
        PoseKind::Awakening,
        PoseKind::Archer,
        PoseKind::IronSumo,
        PoseKind::DiscoDiagonal,
        PoseKind::GoldenRooster,
        PoseKind::ShellDefence,
        PoseKind::NinjaGroundTap,
        PoseKind::SupernovaX,
    ];

    /// Pose at a stage 1 sequence position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Pose by its 1-based number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        usize::from(number).checked_sub(1).and_then(Self::from_index)
    }

    /// 0-based stage 1 sequence position.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 1-based pose number, as shown to players.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PoseKind::Awakening => "The Awakening",
            PoseKind::Archer => "The Archer",
            PoseKind::IronSumo => "The Iron Sumo",
            PoseKind::DiscoDiagonal => "Disco Diagonal",
            PoseKind::GoldenRooster => "The Golden Rooster",
            PoseKind::ShellDefence => "The Shell Defence",
            PoseKind::NinjaGroundTap => "Ninja Ground Tap",
            PoseKind::SupernovaX => "Supernova X",
        }
    }

    /// Score `landmarks` against this pose, criterion by criterion.
    #[must_use]
    pub fn evaluate(self, landmarks: &LandmarkSet) -> Scorecard {
        match self {
            PoseKind::Awakening => matchers::awakening(landmarks),
            PoseKind::Archer => matchers::archer(landmarks),
            PoseKind::IronSumo => matchers::iron_sumo(landmarks),
            PoseKind::DiscoDiagonal => matchers::disco_diagonal(landmarks),
            PoseKind::GoldenRooster => matchers::golden_rooster(landmarks),
            PoseKind::ShellDefence => matchers::shell_defence(landmarks),
            PoseKind::NinjaGroundTap => matchers::ninja_ground_tap(landmarks),
            PoseKind::SupernovaX => matchers::supernova_x(landmarks),
        }
    }

    /// Total score of `landmarks` against this pose.
    #[must_use]
    pub fn score(self, landmarks: &LandmarkSet) -> u32 {
        self.evaluate(landmarks).total()
    }

    /// Best achievable score for this pose.
    #[must_use]
    pub fn max_score(self) -> u32 {
        self.evaluate(&LandmarkSet::new()).max_score()
    }

    /// Static definition record for this pose.
    #[must_use]
    pub fn definition(self) -> PoseDefinition {
        PoseDefinition {
            kind: self,
            number: self.number(),
            name: self.name(),
        }
    }
}

impl std::fmt::Display for PoseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.name())
    }
}

/// Static pose record: which pose, its number and its name.
///
/// ## Example
///
/// ```
/// use motion_game::poses::PoseKind;
///
/// let def = PoseKind::GoldenRooster.definition();
/// assert_eq!(def.number, 5);
/// assert_eq!(def.name, "The Golden Rooster");
/// assert_eq!(def.to_string(), "5. The Golden Rooster");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PoseDefinition {
    /// Which pose.
    pub kind: PoseKind,

    /// 1-based number (stage 1 position).
    pub number: u8,

    /// Display name.
    pub name: &'static str,
}

impl std::fmt::Display for PoseDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
