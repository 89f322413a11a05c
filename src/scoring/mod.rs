//! Pose scoring stages.
//!
//! All functions here are pure and stateless; the only state in the engine
//! lives in [`crate::session::HoldSession`].
//!
//! - [`similarity`] – per-frame weighted comparison against a target. Each
//!   angle contributes `max(0, 1 - |user - target| / tolerance)`; the frame
//!   score is the weight-normalized mean over angles present on both sides.
//! - [`stability`] – per-angle steadiness over a hold, a linear decay of the
//!   population standard deviation.
//! - [`symmetry`] – left/right agreement within a single frame.
//! - [`session_score`] / [`Grade`] – mean similarity scaled by stability, and
//!   its tier.
//! - [`feedback`] – ranked corrections for the largest deviations.
//!
//! Numeric knobs are collected in [`ScoringOptions`]; its defaults are the
//! calibration constants re-exported below.

mod feedback;
mod options;
mod session;
mod similarity;
mod stability;
mod symmetry;

pub use feedback::{correction_hints, feedback, CorrectionHint, HintDirection};
pub use options::{
    FeedbackOptions, GradeThresholds, ScoringOptions, DEFAULT_HINT_THRESHOLD_DEG,
    DEFAULT_MAX_HINTS, DEFAULT_STABILITY_STD_CAP_DEG, DEFAULT_TOLERANCE_DEG, DEFAULT_WEIGHT,
};
pub use session::{session_score, Grade};
pub use similarity::{similarity, Similarity};
pub use stability::{mean_stability, series_stats, stability, SeriesStats};
pub use symmetry::symmetry;

/// Converts a unit score to an integer percentage in [0, 100].
#[inline]
pub fn to_percent(unit: f32) -> u32 {
    (unit.clamp(0.0, 1.0) * 100.0).round() as u32
}
