//! The I/O shell around the engine.
//!
//! A host constructs its detector, moves it into a `FrameDriver` together
//! with a `GameSession`, feeds frames, draws the returned `HudLine`, and
//! finally calls `shutdown()` to take the detector back for release.
//! Camera capture and drawing stay with the host.

pub mod detector;
pub mod driver;

pub use detector::{PoseDetector, ScriptedDetector};
pub use driver::{FrameDriver, HudLine};
