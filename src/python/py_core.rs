//! Landmark and pose bindings for Python.

use numpy::PyReadonlyArray2;
use pyo3::prelude::*;

use crate::core::{Landmark, LandmarkId, LandmarkSet, LANDMARK_COUNT};
use crate::poses::PoseKind;

fn value_error(msg: impl Into<String>) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(msg.into())
}

/// Python wrapper for LandmarkSet.
///
/// Build from `[x, y, visibility]` rows in MediaPipe order.
#[pyclass(name = "LandmarkSet")]
#[derive(Clone, Debug)]
pub struct PyLandmarkSet(pub LandmarkSet);

#[pymethods]
impl PyLandmarkSet {
    /// Create from a list of `(x, y, visibility)` tuples.
    #[new]
    fn new(rows: Vec<(f64, f64, f64)>) -> PyResult<Self> {
        let rows: Vec<[f64; 3]> = rows.into_iter().map(|(x, y, v)| [x, y, v]).collect();
        LandmarkSet::from_rows(&rows)
            .map(Self)
            .map_err(|e| value_error(e.to_string()))
    }

    /// Create from a float64 numpy array of shape `(33, 3)` or wider.
    ///
    /// Only the first three columns (`x`, `y`, `visibility`) are read.
    #[staticmethod]
    fn from_numpy(array: PyReadonlyArray2<'_, f64>) -> PyResult<Self> {
        let view = array.as_array();
        if view.ncols() < 3 {
            return Err(value_error(format!(
                "expected at least 3 columns (x, y, visibility), got {}",
                view.ncols()
            )));
        }
        let rows: Vec<[f64; 3]> = view.rows().into_iter().map(|r| [r[0], r[1], r[2]]).collect();
        LandmarkSet::from_rows(&rows)
            .map(Self)
            .map_err(|e| value_error(e.to_string()))
    }

    /// Get `(x, y, visibility)` for a landmark index.
    fn get(&self, index: usize) -> PyResult<(f64, f64, f64)> {
        let Landmark { x, y, visibility } = self
            .0
            .as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| value_error(format!("landmark index {index} out of range")))?;
        Ok((x, y, visibility))
    }

    fn __len__(&self) -> usize {
        LANDMARK_COUNT
    }

    fn __repr__(&self) -> String {
        let nose = self.0[LandmarkId::Nose];
        format!("LandmarkSet(nose=({:.3}, {:.3}))", nose.x, nose.y)
    }
}

/// Score a landmark set against a pose by its number (1-8).
#[pyfunction]
pub fn score_pose(number: u8, landmarks: &PyLandmarkSet) -> PyResult<u32> {
    PoseKind::from_number(number)
        .map(|pose| pose.score(&landmarks.0))
        .ok_or_else(|| value_error(format!("no pose numbered {number}")))
}

/// Names of all poses in stage 1 order.
#[pyfunction]
pub fn pose_names() -> Vec<String> {
    PoseKind::ALL.iter().map(ToString::to_string).collect()
}
