//! Diagnostics data model for finished holds.
//!
//! `SessionReport` is the entry point returned by
//! [`PoseEvaluator::finish_hold_with_diagnostics`](crate::PoseEvaluator),
//! bundling the `SessionResult` shown to users with a `SessionTrace` that
//! explains how it was reached: per-angle stability, the similarity timeline,
//! and where time was spent.

pub mod session;
pub mod timing;

pub use session::{AngleStabilityReport, FrameSample, SessionReport, SessionTrace};
pub use timing::{StageTiming, TimingBreakdown};
