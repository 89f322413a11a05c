//! Host-facing evaluator tying the stages together.
//!
//! Overview
//! - Each incoming frame runs angle extraction and similarity against the
//!   configured target, yielding a live [`FrameEvaluation`].
//! - While a hold is active the frame is also appended to the hold's
//!   [`HoldSession`](crate::session::HoldSession).
//! - Finishing a hold consumes the accumulator and produces the
//!   [`SessionResult`](crate::session::SessionResult), optionally with a
//!   diagnostics trace.
//!
//! The evaluator never decides when a hold ends. Hosts compare
//! [`PoseEvaluator::hold_elapsed_ms`] against the pose's hold duration (or
//! react to user input) and call `finish_hold` or `reset` themselves. Frames
//! must be fed one at a time in arrival order.

mod frame;
mod pipeline;

pub use frame::FrameEvaluation;
pub use pipeline::PoseEvaluator;

#[cfg(test)]
mod tests;
