//! Landmark fixtures shared by the integration tests.

#![allow(dead_code)]

use motion_game::core::{Landmark, LandmarkId as J, LandmarkSet};
use motion_game::poses::PoseKind;

/// Build a set from `(joint, x, y)` with visibility 0.9.
pub fn body(points: &[(J, f64, f64)]) -> LandmarkSet {
    points.iter().fold(LandmarkSet::new(), |acc, &(id, x, y)| {
        acc.with(id, Landmark::new(x, y, 0.9))
    })
}

/// Override one joint's visibility.
pub fn with_visibility(set: LandmarkSet, id: J, visibility: f64) -> LandmarkSet {
    let l = set[id];
    set.with(id, Landmark::new(l.x, l.y, visibility))
}

/// A landmark set satisfying every criterion of `pose`.
pub fn perfect(pose: PoseKind) -> LandmarkSet {
    match pose {
        PoseKind::Awakening => body(&[
            (J::Nose, 0.5, 0.5),
            (J::LeftWrist, 0.475, 0.1),
            (J::RightWrist, 0.525, 0.1),
        ]),
        PoseKind::Archer => body(&[
            (J::LeftShoulder, 0.6, 0.4),
            (J::LeftElbow, 0.7, 0.4),
            (J::LeftWrist, 0.8, 0.4),
            (J::RightShoulder, 0.4, 0.4),
            (J::RightElbow, 0.3, 0.4),
            (J::RightWrist, 0.35, 0.35),
        ]),
        PoseKind::IronSumo => body(&[
            (J::LeftHip, 0.45, 0.5),
            (J::RightHip, 0.55, 0.5),
            (J::LeftKnee, 0.4, 0.7),
            (J::LeftAnkle, 0.3, 0.9),
            (J::RightAnkle, 0.7, 0.9),
            (J::LeftWrist, 0.48, 0.8),
            (J::RightWrist, 0.52, 0.8),
        ]),
        PoseKind::DiscoDiagonal => body(&[
            (J::Nose, 0.5, 0.3),
            (J::LeftWrist, 0.3, 0.1),
            (J::LeftHip, 0.45, 0.6),
            (J::RightHip, 0.55, 0.6),
            (J::RightWrist, 0.6, 0.65),
        ]),
        PoseKind::GoldenRooster => body(&[
            (J::LeftAnkle, 0.45, 0.9),
            (J::RightAnkle, 0.55, 0.6),
            (J::LeftShoulder, 0.4, 0.4),
            (J::RightShoulder, 0.6, 0.4),
            (J::LeftWrist, 0.2, 0.45),
            (J::RightWrist, 0.8, 0.45),
            (J::LeftIndex, 0.2, 0.5),
            (J::RightIndex, 0.8, 0.5),
        ]),
        PoseKind::ShellDefence => body(&[
            (J::LeftShoulder, 0.4, 0.5),
            (J::LeftKnee, 0.4, 0.7),
            (J::RightShoulder, 0.6, 0.5),
            (J::RightKnee, 0.6, 0.7),
        ]),
        PoseKind::NinjaGroundTap => body(&[
            (J::Nose, 0.5, 0.3),
            (J::LeftAnkle, 0.2, 0.9),
            (J::RightAnkle, 0.8, 0.9),
            (J::LeftWrist, 0.25, 0.85),
            (J::RightWrist, 0.7, 0.1),
        ]),
        PoseKind::SupernovaX => body(&[
            (J::LeftShoulder, 0.4, 0.3),
            (J::RightShoulder, 0.6, 0.3),
            (J::LeftWrist, 0.1, 0.1),
            (J::RightWrist, 0.9, 0.1),
            (J::LeftHip, 0.45, 0.55),
            (J::RightHip, 0.55, 0.55),
            (J::LeftAnkle, 0.2, 0.95),
            (J::RightAnkle, 0.8, 0.95),
        ]),
    }
}

/// A landmark set failing every criterion of `pose`.
pub fn hopeless(pose: PoseKind) -> LandmarkSet {
    let set = match pose {
        PoseKind::Awakening => body(&[
            (J::Nose, 0.5, 0.2),
            (J::LeftWrist, 0.2, 0.8),
            (J::RightWrist, 0.8, 0.8),
        ]),
        PoseKind::Archer => body(&[
            // Both arms folded at 90 degrees, wrists far from shoulder height.
            (J::LeftShoulder, 0.6, 0.2),
            (J::LeftElbow, 0.6, 0.5),
            (J::LeftWrist, 0.7, 0.5),
            (J::RightShoulder, 0.4, 0.2),
            (J::RightElbow, 0.4, 0.5),
            (J::RightWrist, 0.3, 0.5),
        ]),
        PoseKind::IronSumo => body(&[
            (J::LeftHip, 0.45, 0.5),
            (J::RightHip, 0.55, 0.5),
            (J::LeftKnee, 0.45, 0.9),
            (J::LeftAnkle, 0.45, 0.95),
            (J::RightAnkle, 0.55, 0.95),
            (J::LeftWrist, 0.2, 0.2),
            (J::RightWrist, 0.8, 0.2),
        ]),
        PoseKind::DiscoDiagonal => body(&[
            (J::Nose, 0.5, 0.3),
            (J::LeftHip, 0.45, 0.6),
            (J::RightHip, 0.55, 0.6),
            (J::LeftWrist, 0.4, 0.95),
            (J::RightWrist, 0.6, 0.95),
        ]),
        PoseKind::GoldenRooster => body(&[
            (J::LeftAnkle, 0.45, 0.9),
            (J::RightAnkle, 0.55, 0.9),
            (J::LeftShoulder, 0.4, 0.4),
            (J::RightShoulder, 0.6, 0.4),
            (J::LeftWrist, 0.4, 0.8),
            (J::RightWrist, 0.6, 0.8),
            (J::LeftIndex, 0.4, 0.7),
            (J::RightIndex, 0.6, 0.7),
        ]),
        PoseKind::ShellDefence => body(&[
            (J::LeftShoulder, 0.4, 0.3),
            (J::LeftKnee, 0.4, 0.9),
            (J::RightShoulder, 0.6, 0.3),
            (J::RightKnee, 0.6, 0.9),
        ]),
        PoseKind::NinjaGroundTap => body(&[
            (J::Nose, 0.5, 0.3),
            (J::LeftAnkle, 0.4, 0.9),
            (J::RightAnkle, 0.6, 0.9),
            (J::LeftWrist, 0.4, 0.5),
            (J::RightWrist, 0.6, 0.5),
        ]),
        PoseKind::SupernovaX => body(&[
            (J::LeftShoulder, 0.4, 0.3),
            (J::RightShoulder, 0.6, 0.3),
            (J::LeftWrist, 0.45, 0.6),
            (J::RightWrist, 0.55, 0.6),
            (J::LeftHip, 0.45, 0.55),
            (J::RightHip, 0.55, 0.55),
            (J::LeftAnkle, 0.47, 0.95),
            (J::RightAnkle, 0.53, 0.95),
        ]),
    };

    // Drop the visibility-scored joints below the confidence bar.
    [J::Nose, J::LeftShoulder, J::LeftWrist, J::RightWrist]
        .into_iter()
        .fold(set, |acc, id| with_visibility(acc, id, 0.1))
}
