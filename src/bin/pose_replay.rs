// src/bin/pose_replay.rs
//
// Replays a recorded session through the engine and prints one HUD line
// per frame.
//
// Usage: pose_replay <frames.jsonl> [config.json]
//
// Each input line:
//   {"t_ms": 1200, "landmarks": [{"x":..,"y":..,"visibility":..}, ...33]}
//   {"t_ms": 1233, "landmarks": null}
//   {"t_ms": 9000, "retry": true}

use std::fs;
use std::io::{BufRead, BufReader};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::info;

use motion_game::core::{GameConfig, LandmarkSet, ManualClock};
use motion_game::game::GameSession;
use motion_game::shell::{FrameDriver, PoseDetector};

#[derive(Debug, Deserialize)]
struct FrameRecord {
    t_ms: u64,
    #[serde(default)]
    landmarks: Option<LandmarkSet>,
    #[serde(default)]
    retry: bool,
}

/// The recording already carries detector output.
struct RecordedDetector;

impl PoseDetector for RecordedDetector {
    type Frame = FrameRecord;

    fn detect(&mut self, frame: &FrameRecord) -> Option<LandmarkSet> {
        frame.landmarks.clone()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <frames.jsonl> [config.json]", args[0]);
    }

    let config = match args.get(2) {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            GameConfig::from_json(&text).with_context(|| format!("loading {path}"))?
        }
        None => GameConfig::default(),
    };

    let clock = ManualClock::new();
    let session = GameSession::try_new(config, clock.clone())?;
    info!(seed = session.seed(), "replay started");
    let mut driver = FrameDriver::new(RecordedDetector, session);

    let file = fs::File::open(&args[1]).with_context(|| format!("opening {}", args[1]))?;
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FrameRecord = serde_json::from_str(&line)
            .with_context(|| format!("line {}: bad frame record", line_no + 1))?;

        clock.set_elapsed(Duration::from_millis(record.t_ms));
        if record.retry {
            if driver.retry() {
                println!("[{:>7}ms] -- retry --", record.t_ms);
            }
            continue;
        }

        let hud = driver.process_frame(&record);
        println!(
            "[{:>7}ms] {:<7} {} | Total: {}",
            record.t_ms,
            hud.color.name(),
            hud.status,
            hud.total_score
        );
    }

    let (_detector, session) = driver.shutdown();
    let summary = session.summary();
    info!(
        total_score = session.total_score(),
        poses_cleared = summary.poses_cleared(),
        game_over = session.is_game_over(),
        "replay finished"
    );
    for (pose, best) in summary.best_scores() {
        println!("best {pose}: {best}");
    }

    Ok(())
}
