//! Frame driver integration tests.
//!
//! Scripted detector output through the driver, checking the composed HUD
//! line on each frame and the retry cycle.

mod common;

use std::time::Duration;

use common::{hopeless, perfect};
use motion_game::core::{GameConfig, GameRng, LandmarkSet, ManualClock};
use motion_game::game::{ColorTag, GameSession};
use motion_game::poses::PoseKind;
use motion_game::shell::{FrameDriver, PoseDetector, ScriptedDetector};

fn scripted(seed: u64) -> FrameDriver<ScriptedDetector, ManualClock> {
    let session = GameSession::with_parts(GameConfig::default(), ManualClock::new(), GameRng::new(seed));
    FrameDriver::new(ScriptedDetector::default(), session)
}

/// Detector whose frames are the landmark sets themselves.
struct Passthrough;

impl PoseDetector for Passthrough {
    type Frame = Option<LandmarkSet>;

    fn detect(&mut self, frame: &Self::Frame) -> Option<LandmarkSet> {
        frame.clone()
    }
}

// =============================================================================
// HUD Composition
// =============================================================================

#[test]
fn test_match_frame_names_pose_just_matched() {
    let clock = ManualClock::new();
    let session = GameSession::with_parts(GameConfig::default(), clock, GameRng::new(1));
    let mut d = FrameDriver::new(Passthrough, session);

    let hud = d.process_frame(&Some(perfect(PoseKind::Awakening)));
    assert_eq!(hud.status, "Stage 1: 1. The Awakening | MATCH! +10 pts");
    assert_eq!(hud.color, ColorTag::Success);
    assert_eq!(hud.total_score, 10);

    let hud = d.process_frame(&None);
    assert_eq!(hud.status, "Stage 1: 2. The Archer");
    assert_eq!(hud.color, ColorTag::Neutral);
    assert_eq!(hud.total_score, 10);
}

#[test]
fn test_holding_frame_shows_countdown() {
    let clock = ManualClock::new();
    let session = GameSession::with_parts(GameConfig::default(), clock.clone(), GameRng::new(1));
    let script = vec![Some(hopeless(PoseKind::Awakening)); 2];
    let mut d = FrameDriver::new(ScriptedDetector::new(script), session);

    let hud = d.process_frame(&());
    assert_eq!(hud.status, "Stage 1: 1. The Awakening | Time: 10.0s | Score: 0/10");
    assert_eq!(hud.color, ColorTag::Warn);

    clock.advance(Duration::from_millis(2500));
    let hud = d.process_frame(&());
    assert_eq!(hud.status, "Stage 1: 1. The Awakening | Time: 7.5s | Score: 0/10");
}

#[test]
fn test_no_body_does_not_start_timer() {
    let clock = ManualClock::new();
    let session = GameSession::with_parts(GameConfig::default(), clock.clone(), GameRng::new(1));
    let mut d = FrameDriver::new(Passthrough, session);

    for _ in 0..5 {
        d.process_frame(&None);
        clock.advance(Duration::from_secs(5));
    }
    assert_eq!(d.session().time_remaining(), 10.0);

    let hud = d.process_frame(&Some(hopeless(PoseKind::Awakening)));
    assert_eq!(hud.color, ColorTag::Warn);
    assert!(!d.session().is_game_over());
}

#[test]
fn test_stage_two_header() {
    let clock = ManualClock::new();
    let session = GameSession::with_parts(GameConfig::default(), clock.clone(), GameRng::new(9));
    let mut d = FrameDriver::new(Passthrough, session);

    for pose in PoseKind::ALL {
        clock.advance(Duration::from_secs(1));
        d.process_frame(&Some(perfect(pose)));
    }

    let next = d.session().current_pose();
    let hud = d.process_frame(&None);
    assert_eq!(hud.status, format!("Stage 2: {next}"));
    assert_eq!(hud.total_score, 80);
}

// =============================================================================
// Game Over and Retry
// =============================================================================

#[test]
fn test_game_over_retry_cycle() {
    let clock = ManualClock::new();
    let session = GameSession::with_parts(GameConfig::default(), clock.clone(), GameRng::new(1));
    let mut d = FrameDriver::new(Passthrough, session);

    d.process_frame(&Some(perfect(PoseKind::Awakening)));
    d.process_frame(&Some(hopeless(PoseKind::Archer)));
    clock.advance(Duration::from_secs(9));

    let hud = d.process_frame(&Some(perfect(PoseKind::Archer)));
    assert_eq!(hud.status, "Stage 1: 2. The Archer | TIME'S UP! GAME OVER");
    assert_eq!(hud.color, ColorTag::Fail);

    // With a body in view the retry prompt replaces the header.
    let hud = d.process_frame(&Some(perfect(PoseKind::Archer)));
    assert_eq!(hud.status, "GAME OVER! Score: 10 | Press 'r' to Retry");
    assert_eq!(hud.color, ColorTag::Fail);
    assert_eq!(hud.total_score, 10);

    // Without one, only the header.
    let hud = d.process_frame(&None);
    assert_eq!(hud.status, "Stage 1: 2. The Archer");

    assert!(d.retry());
    assert!(!d.retry());

    let hud = d.process_frame(&None);
    assert_eq!(hud.status, "Stage 1: 1. The Awakening");
    assert_eq!(hud.total_score, 0);
}

#[test]
fn test_shutdown_returns_detector_and_session() {
    let (detector, session) = scripted(1).shutdown();
    assert_eq!(detector.remaining(), 0);
    assert_eq!(session.total_score(), 0);
    assert_eq!(session.seed(), 1);
}
