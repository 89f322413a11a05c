//! Per-hold accumulation and the session summary.
//!
//! A [`HoldSession`] lives for exactly one hold attempt: created when the hold
//! begins, fed one [`FrameScore`] per detected frame in arrival order, and
//! consumed by [`HoldSession::finish`] (or simply dropped on reset/skip).
//! Frames are append-only; nothing recorded is ever mutated.

use crate::catalog::PoseTarget;
use crate::joints::AngleMap;
use crate::scoring::{
    feedback, mean_stability, session_score, similarity, symmetry, to_percent, Grade,
    ScoringOptions,
};
use serde::Serialize;

/// Similarity of one evaluated frame together with the angles it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameScore {
    /// Similarity in [0, 1].
    pub score: f32,
    pub timestamp_ms: f64,
    pub angles: AngleMap<f32>,
}

/// Summary of a finished hold. All percentages are integers in [0, 100].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    /// Mean frame similarity.
    pub accuracy: u32,
    /// Mean per-angle stability.
    pub stability: u32,
    /// Left/right symmetry of the final frame.
    pub symmetry: u32,
    /// Accuracy scaled by stability; the grade is derived from this.
    pub score: u32,
    pub grade: Grade,
    /// Corrections for the final frame, most important first.
    pub feedback: Vec<String>,
    pub frames: usize,
    pub duration_ms: f64,
}

/// Accumulator for one hold attempt.
#[derive(Clone, Debug, Default)]
pub struct HoldSession {
    frames: Vec<FrameScore>,
    history: AngleMap<Vec<f32>>,
}

impl HoldSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame and extends the history of every angle it carries.
    pub fn push(&mut self, frame: FrameScore) {
        for (angle, &deg) in frame.angles.iter() {
            self.history.get_or_insert_with(angle, Vec::new).push(deg);
        }
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[FrameScore] {
        &self.frames
    }

    /// Per-angle value history in arrival order.
    pub fn history(&self) -> &AngleMap<Vec<f32>> {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last_frame(&self) -> Option<&FrameScore> {
        self.frames.last()
    }

    /// Time between the first and the last recorded frame.
    pub fn elapsed_ms(&self) -> f64 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => (last.timestamp_ms - first.timestamp_ms).max(0.0),
            _ => 0.0,
        }
    }

    /// Mean similarity in [0, 1]; 0 for an empty hold.
    pub fn mean_similarity(&self) -> f32 {
        if self.frames.is_empty() {
            return 0.0;
        }
        self.frames.iter().map(|f| f.score).sum::<f32>() / self.frames.len() as f32
    }

    /// Mean of the per-angle stabilities over the whole hold, in [0, 1].
    pub fn stability_factor(&self, options: &ScoringOptions) -> f32 {
        mean_stability(&self.history, options.stability_std_cap_deg)
    }

    /// Session score in [0, 100], unrounded.
    pub fn score(&self, options: &ScoringOptions) -> f32 {
        session_score(&self.frames, self.stability_factor(options))
    }

    /// Builds the summary from the accumulated state.
    ///
    /// Symmetry and feedback describe the final frame; accuracy, stability and
    /// the grade describe the whole hold.
    pub fn finish(&self, target: &PoseTarget, options: &ScoringOptions) -> SessionResult {
        let stability_factor = self.stability_factor(options);
        let score = session_score(&self.frames, stability_factor);

        let (symmetry, feedback) = match self.last_frame() {
            Some(last) => {
                let deviations = similarity(&last.angles, target, options).deviations;
                (
                    symmetry(&last.angles),
                    feedback(&deviations, &target.angles, &last.angles, &options.feedback),
                )
            }
            None => (0, Vec::new()),
        };

        SessionResult {
            accuracy: to_percent(self.mean_similarity()),
            stability: to_percent(stability_factor),
            symmetry,
            score: score.round() as u32,
            grade: Grade::from_score(score, &options.grades),
            feedback,
            frames: self.frames.len(),
            duration_ms: self.elapsed_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joints::JointAngle;

    fn frame(score: f32, timestamp_ms: f64, elbow: f32) -> FrameScore {
        let angles = [(JointAngle::LeftElbow, elbow), (JointAngle::RightElbow, elbow)]
            .into_iter()
            .collect();
        FrameScore {
            score,
            timestamp_ms,
            angles,
        }
    }

    fn elbow_target() -> PoseTarget {
        PoseTarget::new(
            [(JointAngle::LeftElbow, 90.0), (JointAngle::RightElbow, 90.0)]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn push_records_history_per_angle() {
        let mut session = HoldSession::new();
        session.push(frame(1.0, 0.0, 90.0));
        session.push(frame(0.8, 33.0, 96.0));
        assert_eq!(session.len(), 2);
        assert_eq!(
            session.history().get(JointAngle::LeftElbow).unwrap(),
            &vec![90.0, 96.0]
        );
        assert!(session.history().get(JointAngle::LeftKnee).is_none());
        assert_eq!(session.elapsed_ms(), 33.0);
    }

    #[test]
    fn empty_session_summary() {
        let result = HoldSession::new().finish(&elbow_target(), &ScoringOptions::default());
        assert_eq!(result.accuracy, 0);
        assert_eq!(result.stability, 100);
        assert_eq!(result.symmetry, 0);
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, Grade::NeedsWork);
        assert!(result.feedback.is_empty());
        assert_eq!(result.frames, 0);
    }

    #[test]
    fn steady_perfect_hold_is_excellent() {
        let mut session = HoldSession::new();
        for i in 0..10 {
            session.push(frame(1.0, i as f64 * 33.0, 90.0));
        }
        let result = session.finish(&elbow_target(), &ScoringOptions::default());
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.stability, 100);
        assert_eq!(result.symmetry, 100);
        assert_eq!(result.score, 100);
        assert_eq!(result.grade, Grade::Excellent);
        assert!(result.feedback.is_empty());
        assert_eq!(result.duration_ms, 297.0);
    }

    #[test]
    fn shaky_hold_is_pulled_down_by_stability() {
        let mut session = HoldSession::new();
        // Elbows alternate 85/95: std dev 5 → stability 2/3.
        for i in 0..8 {
            let elbow = if i % 2 == 0 { 85.0 } else { 95.0 };
            session.push(frame(1.0, i as f64 * 33.0, elbow));
        }
        let options = ScoringOptions::default();
        assert!((session.stability_factor(&options) - 2.0 / 3.0).abs() < 1e-4);
        let result = session.finish(&elbow_target(), &options);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.stability, 67);
        assert_eq!(result.score, 67);
        assert_eq!(result.grade, Grade::Good);
    }

    #[test]
    fn feedback_describes_final_frame() {
        let mut session = HoldSession::new();
        session.push(frame(1.0, 0.0, 90.0));
        session.push(frame(0.0, 33.0, 150.0));
        let result = session.finish(&elbow_target(), &ScoringOptions::default());
        assert_eq!(
            result.feedback,
            vec![
                "Close your left elbow by 60°".to_string(),
                "Close your right elbow by 60°".to_string(),
            ]
        );
    }
}
