//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, MonotonicClock};
use crate::game::GameSession;

use super::py_core::PyLandmarkSet;

/// Python wrapper for GameSession on the system clock.
#[pyclass(name = "GameSession")]
pub struct PyGameSession(GameSession);

#[pymethods]
impl PyGameSession {
    /// Create a new session.
    ///
    /// # Arguments
    /// - seed: RNG seed for the stage 2 shuffle (None = random)
    /// - pass_threshold: Minimum pose score that counts as a match
    #[new]
    #[pyo3(signature = (seed = None, pass_threshold = 6))]
    fn new(seed: Option<u64>, pass_threshold: u32) -> PyResult<Self> {
        let config = GameConfig {
            seed,
            ..GameConfig::default()
        }
        .with_pass_threshold(pass_threshold);

        GameSession::try_new(config, MonotonicClock)
            .map(Self)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Process one frame.
    ///
    /// Returns `(status_text, color_name, score_delta)`.
    fn update(&mut self, landmarks: &PyLandmarkSet) -> (String, &'static str, u32) {
        let outcome = self.0.update(&landmarks.0);
        (outcome.status_text(), outcome.color().name(), outcome.score_delta())
    }

    /// Start over from stage 1.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// Current stage (1 or 2).
    #[getter]
    fn stage(&self) -> u8 {
        self.0.stage().number()
    }

    /// Current pose, e.g. "1. The Awakening".
    #[getter]
    fn pose_name(&self) -> String {
        self.0.current_pose().to_string()
    }

    /// Current pose number (1-8).
    #[getter]
    fn pose_number(&self) -> u8 {
        self.0.current_pose().number()
    }

    #[getter]
    fn total_score(&self) -> u32 {
        self.0.total_score()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.is_game_over()
    }

    #[getter]
    fn time_limit_secs(&self) -> u32 {
        self.0.time_limit_secs()
    }

    /// Seconds left on the current pose.
    #[getter]
    fn time_remaining(&self) -> f64 {
        self.0.time_remaining()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(stage={}, pose={:?}, total={}, over={})",
            self.0.stage().number(),
            self.0.current_pose().name(),
            self.0.total_score(),
            self.0.is_game_over()
        )
    }
}
