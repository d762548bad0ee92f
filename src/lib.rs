//! # motion-game
//!
//! A real-time pose-matching game engine.
//!
//! Each frame, an external pose detector delivers a set of normalized body
//! landmarks. The engine scores them against the current target pose,
//! runs that pose's countdown, and either advances, keeps waiting, or
//! ends the game.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The engine never captures, draws or sleeps. Timing comes
//!    from a `Clock` read once per update.
//!
//! 2. **Best-effort input**: Landmark sets are never rejected. Missing or
//!    low-confidence joints just score low.
//!
//! 3. **Injected collaborators**: Detector, clock and RNG are passed in,
//!    so a whole session can be replayed deterministically.
//!
//! ## Modules
//!
//! - `core`: Landmarks, geometry, RNG, clock, configuration, errors
//! - `poses`: The eight target poses and their matchers
//! - `game`: Stage progression and the session controller
//! - `shell`: Detector seam and frame driver for host loops

pub mod core;
pub mod game;
pub mod poses;
pub mod shell;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Clock, ConfigError, GameConfig, GameRng, Landmark, LandmarkError, LandmarkId, LandmarkSet,
    ManualClock, MonotonicClock, TimeLimits,
};

pub use crate::poses::{Criterion, PoseDefinition, PoseKind, Scorecard};

pub use crate::game::{ColorTag, FrameOutcome, GameSession, Progression, RunSummary, Stage, Transition};

pub use crate::shell::{FrameDriver, HudLine, PoseDetector, ScriptedDetector};
