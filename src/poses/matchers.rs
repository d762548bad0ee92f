//! The eight pose matchers.
//!
//! Each matcher awards fixed points per geometric criterion and sums them.
//! Thresholds are dimensionless, in normalized image coordinates, and were
//! tuned by hand; changing any of them changes how the game feels.
//!
//! Missing or low-confidence joints are not rejected. They simply fail
//! whatever criteria they take part in. Visibility is itself scored by
//! some poses.

use crate::core::{angle, distance, LandmarkId as J, LandmarkSet};

use super::scorecard::Scorecard;

const VISIBLE: f64 = 0.5;

/// 1. The Awakening: arms overhead, hands meeting in an "O".
pub fn awakening(lm: &LandmarkSet) -> Scorecard {
    let nose = &lm[J::Nose];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];

    let mut card = Scorecard::new();
    card.award("wrists above nose", 4, lw.y < nose.y && rw.y < nose.y);
    card.award("wrists together", 4, distance(lw, rw) < 0.2);
    card.award(
        "wrists visible",
        2,
        lw.visibility > VISIBLE && rw.visibility > VISIBLE,
    );
    card
}

/// 2. The Archer: one arm straight, the other bent as if drawing a bow.
pub fn archer(lm: &LandmarkSet) -> Scorecard {
    let ls = &lm[J::LeftShoulder];
    let rs = &lm[J::RightShoulder];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];

    let left = angle(ls, &lm[J::LeftElbow], lw);
    let right = angle(rs, &lm[J::RightElbow], rw);

    let mut card = Scorecard::new();
    card.award(
        "one arm straight, one bent",
        6,
        (left > 150.0 && right < 90.0) || (right > 150.0 && left < 90.0),
    );
    // Either wrist counts, whichever arm is the straight one.
    card.award(
        "arm at shoulder height",
        2,
        (lw.y - ls.y).abs() < 0.2 || (rw.y - rs.y).abs() < 0.2,
    );
    card.award("shoulder visible", 2, ls.visibility > VISIBLE);
    card
}

/// 3. The Iron Sumo: wide squat, arms hanging down with hands together.
pub fn iron_sumo(lm: &LandmarkSet) -> Scorecard {
    let lh = &lm[J::LeftHip];
    let rh = &lm[J::RightHip];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];

    let hip_width = (lh.x - rh.x).abs();
    let ankle_width = (lm[J::LeftAnkle].x - lm[J::RightAnkle].x).abs();

    let mut card = Scorecard::new();
    card.award("wide stance", 3, ankle_width > hip_width * 1.5);
    card.award("squat depth", 2, (lh.y - lm[J::LeftKnee].y).abs() < 0.3);
    card.award("wrists below hips", 3, lw.y > lh.y && rw.y > rh.y);
    card.award("wrists together", 2, distance(lw, rw) < 0.15);
    card
}

/// 4. Disco Diagonal: one arm high, the other hand on the hip.
pub fn disco_diagonal(lm: &LandmarkSet) -> Scorecard {
    let nose = &lm[J::Nose];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];

    let l_high = lw.y < nose.y;
    let r_high = rw.y < nose.y;
    let l_akimbo = (lw.y - lm[J::LeftHip].y).abs() < 0.2;
    let r_akimbo = (rw.y - lm[J::RightHip].y).abs() < 0.2;

    let mut card = Scorecard::new();
    card.award_tiered(
        "one arm high, other on hip",
        &[
            (8, (l_high && r_akimbo) || (r_high && l_akimbo)),
            (4, l_high || r_high),
        ],
    );
    card.award("face visible", 2, nose.visibility > VISIBLE);
    card
}

/// 5. The Golden Rooster: balance on one leg, arms out, hands pointing down.
pub fn golden_rooster(lm: &LandmarkSet) -> Scorecard {
    let ls = &lm[J::LeftShoulder];
    let rs = &lm[J::RightShoulder];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];

    let mut card = Scorecard::new();
    card.award(
        "one leg raised",
        3,
        (lm[J::LeftAnkle].y - lm[J::RightAnkle].y).abs() > 0.15,
    );
    card.award(
        "arms horizontal",
        3,
        (lw.y - ls.y).abs() < 0.15 && (rw.y - rs.y).abs() < 0.15,
    );
    card.award(
        "hands pointing down",
        4,
        lm[J::LeftIndex].y > lw.y && lm[J::RightIndex].y > rw.y,
    );
    card
}

/// 6. The Shell Defence: curled into a tight crouch.
pub fn shell_defence(lm: &LandmarkSet) -> Scorecard {
    let ls = &lm[J::LeftShoulder];

    let dist_l = distance(ls, &lm[J::LeftKnee]);
    let dist_r = distance(&lm[J::RightShoulder], &lm[J::RightKnee]);

    let mut card = Scorecard::new();
    card.award_tiered(
        "shoulders near knees",
        &[
            (8, dist_l < 0.3 && dist_r < 0.3),
            (4, dist_l < 0.4 && dist_r < 0.4),
        ],
    );
    card.award("shoulder visible", 2, ls.visibility > VISIBLE);
    card
}

/// 7. Ninja Ground Tap: side lunge, one hand at the floor, one overhead.
pub fn ninja_ground_tap(lm: &LandmarkSet) -> Scorecard {
    let nose = &lm[J::Nose];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];
    let la = &lm[J::LeftAnkle];
    let ra = &lm[J::RightAnkle];

    // "Low" means within 0.1 above the ankle, or below it.
    let l_low = lw.y > la.y - 0.1;
    let r_low = rw.y > ra.y - 0.1;
    let l_high = lw.y < nose.y;
    let r_high = rw.y < nose.y;

    let mut card = Scorecard::new();
    card.award(
        "one hand down, one hand up",
        6,
        (l_low && r_high) || (r_low && l_high),
    );
    card.award("wide stance", 4, (la.x - ra.x).abs() > 0.4);
    card
}

/// 8. Supernova X: arms up and out, legs spread.
pub fn supernova_x(lm: &LandmarkSet) -> Scorecard {
    let ls = &lm[J::LeftShoulder];
    let rs = &lm[J::RightShoulder];
    let lw = &lm[J::LeftWrist];
    let rw = &lm[J::RightWrist];

    let arms_wide = (lw.x - rw.x).abs() > (ls.x - rs.x).abs() * 1.5;
    let arms_up = lw.y < ls.y && rw.y < rs.y;
    let legs_wide = (lm[J::LeftAnkle].x - lm[J::RightAnkle].x).abs()
        > (lm[J::LeftHip].x - lm[J::RightHip].x).abs() * 1.5;

    let mut card = Scorecard::new();
    card.award("arms up and wide", 5, arms_wide && arms_up);
    card.award("legs wide", 5, legs_wide);
    card
}
