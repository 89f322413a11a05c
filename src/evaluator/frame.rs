use crate::joints::AngleMap;
use crate::scoring::to_percent;
use serde::Serialize;

/// Live result for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEvaluation {
    pub timestamp_ms: f64,
    pub angles: AngleMap<f32>,
    /// Similarity in [0, 1].
    pub score: f32,
    /// `score` as an integer percentage.
    pub similarity_percent: u32,
    /// Absolute deviation (degrees) per target angle.
    pub deviations: AngleMap<f32>,
}

impl FrameEvaluation {
    pub(crate) fn new(
        timestamp_ms: f64,
        angles: AngleMap<f32>,
        score: f32,
        deviations: AngleMap<f32>,
    ) -> Self {
        Self {
            timestamp_ms,
            angles,
            score,
            similarity_percent: to_percent(score),
            deviations,
        }
    }
}
