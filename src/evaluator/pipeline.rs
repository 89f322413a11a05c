use super::FrameEvaluation;
use crate::catalog::PoseTarget;
use crate::diagnostics::{SessionReport, SessionTrace, TimingBreakdown};
use crate::joints::extract_angles;
use crate::landmarks::LandmarkSet;
use crate::scoring::{correction_hints, similarity, CorrectionHint, ScoringOptions};
use crate::session::{FrameScore, HoldSession, SessionResult};
use log::debug;
use std::time::Instant;

/// Live hold state: the accumulator plus per-stage timings.
#[derive(Debug, Default)]
struct ActiveHold {
    session: HoldSession,
    timings: TimingBreakdown,
}

/// Scores frames against one target pose and tracks at most one hold.
pub struct PoseEvaluator {
    target: PoseTarget,
    options: ScoringOptions,
    hold: Option<ActiveHold>,
    last: Option<FrameEvaluation>,
}

impl PoseEvaluator {
    pub fn new(target: PoseTarget, options: ScoringOptions) -> Self {
        Self {
            target,
            options,
            hold: None,
            last: None,
        }
    }

    pub fn target(&self) -> &PoseTarget {
        &self.target
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Switches to another target; any live hold is discarded.
    pub fn set_target(&mut self, target: PoseTarget) {
        self.target = target;
        self.reset();
    }

    /// Evaluates one frame and, while holding, records it.
    pub fn process(&mut self, landmarks: &LandmarkSet, timestamp_ms: f64) -> FrameEvaluation {
        let t0 = Instant::now();
        let angles = extract_angles(landmarks);
        let extract_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let sim = similarity(&angles, &self.target, &self.options);
        let similarity_ms = t1.elapsed().as_secs_f64() * 1000.0;

        let evaluation = FrameEvaluation::new(timestamp_ms, angles, sim.score, sim.deviations);

        match self.hold.as_mut() {
            Some(hold) => {
                hold.session.push(FrameScore {
                    score: evaluation.score,
                    timestamp_ms,
                    angles: evaluation.angles.clone(),
                });
                hold.timings.accumulate("extract", extract_ms);
                hold.timings.accumulate("similarity", similarity_ms);
            }
            None => debug!(
                "PoseEvaluator::process frame at {timestamp_ms:.1} ms not recorded (no active hold)"
            ),
        }

        self.last = Some(evaluation.clone());
        evaluation
    }

    /// Starts a fresh hold, discarding any hold still in progress.
    pub fn begin_hold(&mut self) {
        if let Some(prev) = self.hold.take() {
            debug!(
                "PoseEvaluator::begin_hold discarding unfinished hold with {} frames",
                prev.session.len()
            );
        }
        debug!("PoseEvaluator::begin_hold");
        self.hold = Some(ActiveHold::default());
    }

    /// Cancels the current hold without producing a result.
    pub fn reset(&mut self) {
        if let Some(prev) = self.hold.take() {
            debug!(
                "PoseEvaluator::reset dropped hold with {} frames",
                prev.session.len()
            );
        }
        self.last = None;
    }

    pub fn is_holding(&self) -> bool {
        self.hold.is_some()
    }

    pub fn frames_in_hold(&self) -> usize {
        self.hold.as_ref().map_or(0, |h| h.session.len())
    }

    /// Time covered by the recorded frames of the current hold.
    pub fn hold_elapsed_ms(&self) -> f64 {
        self.hold.as_ref().map_or(0.0, |h| h.session.elapsed_ms())
    }

    /// Read-only view of the live accumulator.
    pub fn session(&self) -> Option<&HoldSession> {
        self.hold.as_ref().map(|h| &h.session)
    }

    /// Most recent live evaluation, if any frame was processed since the last reset.
    pub fn last_evaluation(&self) -> Option<&FrameEvaluation> {
        self.last.as_ref()
    }

    /// Structured hints for the most recent frame.
    pub fn live_hints(&self) -> Vec<CorrectionHint> {
        match &self.last {
            Some(eval) => correction_hints(
                &eval.deviations,
                &self.target.angles,
                &eval.angles,
                &self.options.feedback,
            ),
            None => Vec::new(),
        }
    }

    /// Ends the current hold and summarizes it. `None` when no hold is active.
    pub fn finish_hold(&mut self) -> Option<SessionResult> {
        let hold = self.hold.take()?;
        let result = hold.session.finish(&self.target, &self.options);
        debug!(
            "PoseEvaluator::finish_hold frames={} score={} grade={}",
            result.frames, result.score, result.grade
        );
        Some(result)
    }

    /// Like [`finish_hold`](Self::finish_hold) but also returns the trace.
    pub fn finish_hold_with_diagnostics(&mut self) -> Option<SessionReport> {
        let mut hold = self.hold.take()?;
        let t0 = Instant::now();
        let result = hold.session.finish(&self.target, &self.options);
        hold.timings.accumulate("finish", t0.elapsed().as_secs_f64() * 1000.0);
        let trace = SessionTrace::from_session(&hold.session, &self.options, hold.timings);
        debug!(
            "PoseEvaluator::finish_hold_with_diagnostics frames={} score={:.2} stability={:.3}",
            trace.frames, trace.session_score, trace.stability_factor
        );
        Some(SessionReport { result, trace })
    }
}
