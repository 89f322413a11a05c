use super::TimingBreakdown;
use crate::joints::JointAngle;
use crate::scoring::{series_stats, stability, ScoringOptions};
use crate::session::{HoldSession, SessionResult};
use serde::Serialize;

/// Result produced by
/// [`PoseEvaluator::finish_hold_with_diagnostics`](crate::PoseEvaluator::finish_hold_with_diagnostics).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub result: SessionResult,
    pub trace: SessionTrace,
}

/// How a session result was reached.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTrace {
    pub frames: usize,
    pub duration_ms: f64,
    pub mean_similarity: f32,
    pub stability_factor: f32,
    /// Unrounded session score used for grading.
    pub session_score: f32,
    pub angles: Vec<AngleStabilityReport>,
    pub timeline: Vec<FrameSample>,
    pub timings: TimingBreakdown,
}

/// Steadiness of one angle across the hold.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleStabilityReport {
    pub angle: JointAngle,
    pub samples: usize,
    pub mean_deg: f32,
    pub std_dev_deg: f32,
    pub stability: f32,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSample {
    pub timestamp_ms: f64,
    pub score: f32,
}

impl SessionTrace {
    pub fn from_session(
        session: &HoldSession,
        options: &ScoringOptions,
        timings: TimingBreakdown,
    ) -> Self {
        let angles = session
            .history()
            .iter()
            .map(|(angle, series)| {
                let stats = series_stats(series);
                AngleStabilityReport {
                    angle,
                    samples: stats.samples,
                    mean_deg: stats.mean,
                    std_dev_deg: stats.std_dev,
                    stability: stability(series, options.stability_std_cap_deg),
                }
            })
            .collect();
        let timeline = session
            .frames()
            .iter()
            .map(|f| FrameSample {
                timestamp_ms: f.timestamp_ms,
                score: f.score,
            })
            .collect();

        Self {
            frames: session.len(),
            duration_ms: session.elapsed_ms(),
            mean_similarity: session.mean_similarity(),
            stability_factor: session.stability_factor(options),
            session_score: session.score(options),
            angles,
            timeline,
            timings,
        }
    }

    /// The least steady angle, if any history was recorded.
    pub fn least_stable(&self) -> Option<&AngleStabilityReport> {
        self.angles
            .iter()
            .min_by(|a, b| a.stability.total_cmp(&b.stability))
    }
}
