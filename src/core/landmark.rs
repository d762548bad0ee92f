//! Body landmarks delivered by the pose detector.
//!
//! ## Coordinates
//!
//! Positions are normalized image-space coordinates in `[0, 1]` with the
//! origin at the top-left corner and `y` increasing downward. "Above" in
//! pose terms therefore means a *smaller* `y`.
//!
//! ## Topology
//!
//! A `LandmarkSet` always holds the full 33-point MediaPipe pose topology,
//! indexed by `LandmarkId`. Joints the detector did not report keep the
//! default `(0, 0)` position with zero visibility, so scoring code never
//! has to deal with a missing entry.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::LandmarkError;

/// Number of landmarks in the pose topology.
pub const LANDMARK_COUNT: usize = 33;

/// Joint identifier, numbered as in the MediaPipe pose topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LandmarkId {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl LandmarkId {
    /// Position of this joint in a `LandmarkSet`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A single detected joint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position, normalized to image width.
    pub x: f64,
    /// Vertical position, normalized to image height (downward).
    pub y: f64,
    /// Detector confidence that the joint is visible, in `[0, 1]`.
    pub visibility: f64,
}

impl Landmark {
    /// Create a landmark.
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self { x, y, visibility }
    }

    /// Create a fully visible landmark.
    #[must_use]
    pub const fn visible(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }
}

/// All landmarks for one frame.
///
/// ## Example
///
/// ```
/// use motion_game::core::{Landmark, LandmarkId, LandmarkSet};
///
/// let set = LandmarkSet::new()
///     .with(LandmarkId::Nose, Landmark::visible(0.5, 0.2))
///     .with(LandmarkId::LeftWrist, Landmark::new(0.4, 0.1, 0.9));
///
/// assert_eq!(set[LandmarkId::Nose].y, 0.2);
/// assert_eq!(set[LandmarkId::RightWrist].visibility, 0.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Create a set with every joint at the origin and zero visibility.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: vec![Landmark::default(); LANDMARK_COUNT],
        }
    }

    /// Set a joint (builder pattern).
    #[must_use]
    pub fn with(mut self, id: LandmarkId, landmark: Landmark) -> Self {
        self[id] = landmark;
        self
    }

    /// Set a joint in place.
    pub fn set(&mut self, id: LandmarkId, landmark: Landmark) {
        self[id] = landmark;
    }

    /// Build a set from raw `[x, y, visibility]` rows in topology order.
    pub fn from_rows(rows: &[[f64; 3]]) -> Result<Self, LandmarkError> {
        rows.iter()
            .map(|&[x, y, visibility]| Landmark::new(x, y, visibility))
            .collect::<Vec<_>>()
            .try_into()
    }

    /// All landmarks in topology order.
    #[must_use]
    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = LandmarkError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::Count {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}

impl Index<LandmarkId> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, id: LandmarkId) -> &Landmark {
        &self.points[id.index()]
    }
}

impl IndexMut<LandmarkId> for LandmarkSet {
    fn index_mut(&mut self, id: LandmarkId) -> &mut Landmark {
        &mut self.points[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_invisible() {
        let set = LandmarkSet::new();
        assert_eq!(set.as_slice().len(), LANDMARK_COUNT);
        assert!(set.as_slice().iter().all(|l| l.visibility == 0.0));
    }

    #[test]
    fn test_indexing_matches_topology() {
        assert_eq!(LandmarkId::Nose.index(), 0);
        assert_eq!(LandmarkId::LeftShoulder.index(), 11);
        assert_eq!(LandmarkId::RightWrist.index(), 16);
        assert_eq!(LandmarkId::LeftIndex.index(), 19);
        assert_eq!(LandmarkId::RightAnkle.index(), 28);
        assert_eq!(LandmarkId::RightFootIndex.index(), LANDMARK_COUNT - 1);
    }

    #[test]
    fn test_builder_and_set() {
        let mut set = LandmarkSet::new().with(LandmarkId::LeftHip, Landmark::visible(0.4, 0.6));
        set.set(LandmarkId::RightHip, Landmark::new(0.6, 0.6, 0.3));

        assert_eq!(set[LandmarkId::LeftHip], Landmark::visible(0.4, 0.6));
        assert_eq!(set[LandmarkId::RightHip].visibility, 0.3);
        assert_eq!(set.as_slice()[23], Landmark::visible(0.4, 0.6));
    }

    #[test]
    fn test_from_rows() {
        let mut rows = vec![[0.0; 3]; LANDMARK_COUNT];
        rows[0] = [0.5, 0.25, 0.9];

        let set = LandmarkSet::from_rows(&rows).unwrap();
        assert_eq!(set[LandmarkId::Nose], Landmark::new(0.5, 0.25, 0.9));
    }

    #[test]
    fn test_wrong_count_rejected() {
        let err = LandmarkSet::from_rows(&[[0.0; 3]; 17]).unwrap_err();
        assert_eq!(
            err,
            LandmarkError::Count {
                expected: LANDMARK_COUNT,
                actual: 17
            }
        );
    }

    #[test]
    fn test_serde_checks_length() {
        let set = LandmarkSet::new().with(LandmarkId::Nose, Landmark::visible(0.1, 0.2));
        let json = serde_json::to_string(&set).unwrap();
        let back: LandmarkSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);

        let short = r#"[{"x":0.0,"y":0.0,"visibility":1.0}]"#;
        assert!(serde_json::from_str::<LandmarkSet>(short).is_err());
    }
}
