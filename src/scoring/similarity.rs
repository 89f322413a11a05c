use super::ScoringOptions;
use crate::angle::angular_difference_deg;
use crate::catalog::PoseTarget;
use crate::joints::AngleMap;
use serde::Serialize;

/// Outcome of comparing one frame against a target pose.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Similarity {
    /// Weight-normalized mean of per-angle scores, in [0, 1].
    pub score: f32,
    /// Absolute difference (degrees) for every target angle observed in the frame.
    pub deviations: AngleMap<f32>,
}

/// Scores `user` angles against `target`.
///
/// The target drives which angles matter. Angles missing from either side are
/// skipped, so partial detections renormalize over what is available instead
/// of being penalized. When nothing contributes the score is 0.
pub fn similarity(user: &AngleMap<f32>, target: &PoseTarget, options: &ScoringOptions) -> Similarity {
    let mut deviations = AngleMap::new();
    let mut weighted = 0.0f32;
    let mut total_weight = 0.0f32;

    for (angle, &target_deg) in target.angles.iter() {
        let Some(user_deg) = user.value(angle) else {
            continue;
        };
        let diff = angular_difference_deg(user_deg, target_deg);
        deviations.insert(angle, diff);

        let tolerance = target.tolerance(angle, options.default_tolerance_deg);
        let weight = target.weight(angle, options.default_weight).max(0.0);
        weighted += angle_score(diff, tolerance) * weight;
        total_weight += weight;
    }

    let score = if total_weight > 0.0 {
        (weighted / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Similarity { score, deviations }
}

/// Linear falloff reaching zero once `diff` meets the tolerance. A
/// non-positive tolerance only accepts an exact match.
#[inline]
fn angle_score(diff: f32, tolerance: f32) -> f32 {
    if tolerance <= 0.0 {
        return if diff == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - diff / tolerance).max(0.0)
}
