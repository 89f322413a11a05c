#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod catalog;
pub mod diagnostics;
pub mod evaluator;
pub mod landmarks;
pub mod scoring;
pub mod session;

// Building blocks – public for tools and advanced hosts.
pub mod angle;
pub mod config;
pub mod io;
pub mod joints;
pub mod synthetic;

// --- High-level re-exports -------------------------------------------------

// Main entry points: evaluator + results.
pub use crate::evaluator::{FrameEvaluation, PoseEvaluator};
pub use crate::session::{FrameScore, HoldSession, SessionResult};

// Inputs: landmarks, angle vocabulary, pose definitions.
pub use crate::catalog::{PoseCatalog, PoseDefinition, PoseTarget};
pub use crate::joints::{extract_angles, AngleMap, JointAngle};
pub use crate::landmarks::{JointIndex, LandmarkSet, LANDMARK_COUNT};

// Scoring surface and diagnostics.
pub use crate::diagnostics::{SessionReport, SessionTrace};
pub use crate::scoring::{Grade, ScoringOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pose_evaluator::prelude::*;
/// use pose_evaluator::synthetic::figure_with_elbows;
///
/// let target = PoseTarget::new(
///     [(JointAngle::LeftElbow, 90.0), (JointAngle::RightElbow, 90.0)]
///         .into_iter()
///         .collect(),
/// );
/// let mut evaluator = PoseEvaluator::new(target, ScoringOptions::default());
///
/// evaluator.begin_hold();
/// let live = evaluator.process(&figure_with_elbows(90.0, 90.0), 0.0);
/// assert_eq!(live.similarity_percent, 100);
///
/// let result = evaluator.finish_hold().unwrap();
/// assert_eq!(result.grade, Grade::Excellent);
/// ```
pub mod prelude {
    pub use crate::catalog::{PoseCatalog, PoseTarget};
    pub use crate::joints::{AngleMap, JointAngle};
    pub use crate::landmarks::LandmarkSet;
    pub use crate::scoring::{Grade, ScoringOptions};
    pub use crate::{PoseEvaluator, SessionResult};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::angle::angle_between;
    pub use crate::joints::extract_angles;
    pub use crate::scoring::{
        correction_hints, feedback, mean_stability, session_score, similarity, stability,
        symmetry, CorrectionHint, HintDirection, Similarity,
    };
}
