//! Target poses and their matchers.
//!
//! ## Key Types
//!
//! - `PoseKind`: The eight target poses, in stage 1 order
//! - `PoseDefinition`: Static record (kind, number, name)
//! - `Scorecard`: Per-criterion breakdown of one matcher run
//!
//! Matchers are pure functions `&LandmarkSet -> Scorecard`. Dispatch goes
//! through `PoseKind::evaluate`, so no function pointers are stored.

pub mod definition;
pub mod matchers;
pub mod scorecard;

pub use definition::{PoseDefinition, PoseKind};
pub use scorecard::{Criterion, Scorecard};
