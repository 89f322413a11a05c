use serde::{Deserialize, Serialize};

/// Deviation (degrees) at which an angle's similarity reaches zero when the
/// pose definition gives no tolerance.
pub const DEFAULT_TOLERANCE_DEG: f32 = 30.0;
/// Weight of an angle when the pose definition gives none.
pub const DEFAULT_WEIGHT: f32 = 1.0;
/// Standard deviation (degrees) at which stability bottoms out at zero.
pub const DEFAULT_STABILITY_STD_CAP_DEG: f32 = 15.0;
/// Deviations below this are not worth a hint.
pub const DEFAULT_HINT_THRESHOLD_DEG: f32 = 10.0;
pub const DEFAULT_MAX_HINTS: usize = 3;

/// Numeric knobs shared by the scoring stages.
///
/// Every field defaults to the calibration constants above, so a partially
/// specified JSON object only overrides what it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    /// Fallback tolerance for angles the pose leaves unspecified (degrees).
    pub default_tolerance_deg: f32,
    /// Fallback weight for angles the pose leaves unspecified.
    pub default_weight: f32,
    /// Standard deviation mapped to zero stability (degrees).
    pub stability_std_cap_deg: f32,
    pub feedback: FeedbackOptions,
    pub grades: GradeThresholds,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            default_tolerance_deg: DEFAULT_TOLERANCE_DEG,
            default_weight: DEFAULT_WEIGHT,
            stability_std_cap_deg: DEFAULT_STABILITY_STD_CAP_DEG,
            feedback: FeedbackOptions::default(),
            grades: GradeThresholds::default(),
        }
    }
}

/// Controls how many correction hints are produced and which are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackOptions {
    pub max_hints: usize,
    /// Ranked entries whose deviation is below this are dropped, not replaced.
    pub threshold_deg: f32,
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            max_hints: DEFAULT_MAX_HINTS,
            threshold_deg: DEFAULT_HINT_THRESHOLD_DEG,
        }
    }
}

/// Inclusive lower bounds (session score, 0..=100) of the upper two tiers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub excellent: f32,
    pub good: f32,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: 80.0,
            good: 60.0,
        }
    }
}
