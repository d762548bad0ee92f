//! Pose detector seam.
//!
//! The engine never touches images. Hosts implement `PoseDetector` over
//! whatever model they run and hand the detector to a `FrameDriver`, which
//! owns it until `shutdown()` gives it back for release.

use std::collections::VecDeque;

use crate::core::LandmarkSet;

/// Produces one landmark set per frame.
///
/// ## Implementation Notes
///
/// - `detect`: Return `None` when no body is in view. The driver then
///   skips the session update for that frame.
/// - Landmarks must already be normalized to `[0, 1]` image coordinates.
pub trait PoseDetector {
    /// Input frame type (image buffer, tensor, recorded sample...).
    type Frame: ?Sized;

    /// Detect the body in `frame`.
    fn detect(&mut self, frame: &Self::Frame) -> Option<LandmarkSet>;
}

/// Detector that replays pre-recorded results, ignoring frame content.
///
/// Used to drive sessions from recordings and in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDetector {
    script: VecDeque<Option<LandmarkSet>>,
}

impl ScriptedDetector {
    /// Create a detector that yields `script` in order, then `None`.
    pub fn new(script: impl IntoIterator<Item = Option<LandmarkSet>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Append a result.
    pub fn push(&mut self, result: Option<LandmarkSet>) {
        self.script.push_back(result);
    }

    /// Results not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl PoseDetector for ScriptedDetector {
    type Frame = ();

    fn detect(&mut self, _frame: &()) -> Option<LandmarkSet> {
        self.script.pop_front().flatten()
    }
}
