//! Core engine types: landmarks, geometry, RNG, clock, configuration.
//!
//! This module contains the building blocks shared by the pose matchers
//! and the game session. Nothing here knows about specific poses.

pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod landmark;
pub mod rng;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{GameConfig, TimeLimits, MAX_POSE_SCORE};
pub use error::{ConfigError, LandmarkError};
pub use geometry::{angle, distance};
pub use landmark::{Landmark, LandmarkId, LandmarkSet, LANDMARK_COUNT};
pub use rng::GameRng;
