//! Game flow: stage progression, the per-frame session controller, and
//! the status it reports.
//!
//! ## Key Types
//!
//! - `Progression`: Stage 1 sequence, then stage 2 shuffle
//! - `GameSession`: Countdown, scoring, pass/fail and score accumulation
//! - `FrameOutcome`: What one `update()` did, with text and color
//! - `RunSummary`: Poses cleared and best scores for the current run

pub mod progression;
pub mod session;
pub mod status;
pub mod summary;

pub use progression::{Progression, Stage, Transition};
pub use session::GameSession;
pub use status::{ColorTag, FrameOutcome};
pub use summary::RunSummary;
