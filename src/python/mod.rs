//! Python bindings for the motion-game engine.
//!
//! Lets a Python host (e.g. a MediaPipe capture loop) keep camera and
//! drawing code while the engine runs in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import numpy as np
//! import motion_game as mg
//!
//! game = mg.GameSession(seed=42)
//!
//! # Per frame, with a body detected:
//! rows = np.array([[lm.x, lm.y, lm.visibility] for lm in results.pose_landmarks.landmark])
//! text, color, delta = game.update(mg.LandmarkSet.from_numpy(rows))
//!
//! if game.game_over:
//!     game.reset()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// motion_game: pose-matching game engine.
///
/// This module provides:
/// - LandmarkSet construction from lists or numpy arrays
/// - GameSession (countdown, scoring, stage progression)
/// - Direct pose scoring for calibration tools
#[pymodule]
fn motion_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLandmarkSet>()?;
    m.add_class::<PyGameSession>()?;

    m.add_function(wrap_pyfunction!(score_pose, m)?)?;
    m.add_function(wrap_pyfunction!(pose_names, m)?)?;

    Ok(())
}
