use super::GradeThresholds;
use crate::session::FrameScore;
use serde::Serialize;
use std::fmt;

/// Hold-level score in [0, 100].
///
/// The mean per-frame similarity is multiplied by `stability_factor`, so a
/// pose that is matched but not sustained is pulled down. An empty sequence
/// means nothing was evaluated and scores 0.
pub fn session_score(frames: &[FrameScore], stability_factor: f32) -> f32 {
    if frames.is_empty() {
        return 0.0;
    }
    let mean = frames.iter().map(|f| f.score).sum::<f32>() / frames.len() as f32;
    (mean * stability_factor.clamp(0.0, 1.0) * 100.0).clamp(0.0, 100.0)
}

/// Performance tier of a session score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    NeedsWork,
}

impl Grade {
    /// Tier for `score`; thresholds are inclusive lower bounds.
    pub fn from_score(score: f32, thresholds: &GradeThresholds) -> Self {
        if score >= thresholds.excellent {
            Grade::Excellent
        } else if score >= thresholds.good {
            Grade::Good
        } else {
            Grade::NeedsWork
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::NeedsWork => "needs_work",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
