use super::FeedbackOptions;
use crate::joints::{AngleMap, JointAngle};
use serde::Serialize;
use std::fmt;

/// Which way a joint has to move to approach the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintDirection {
    /// Increase the joint angle.
    Open,
    /// Decrease the joint angle.
    Close,
}

/// One corrective instruction, rendered as e.g. `Close your left elbow by 80°`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionHint {
    pub angle: JointAngle,
    pub direction: HintDirection,
    /// Rounded magnitude of the correction in degrees.
    pub degrees: u32,
}

impl fmt::Display for CorrectionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.direction {
            HintDirection::Open => "Open",
            HintDirection::Close => "Close",
        };
        write!(f, "{verb} your {} by {}°", self.angle.label(), self.degrees)
    }
}

/// Ranks `deviations` by magnitude and turns the largest into hints.
///
/// At most `max_hints` top-ranked entries are considered; any of those below
/// `threshold_deg` is dropped rather than replaced by a lower-ranked one, so
/// the result may be shorter than `max_hints` or empty. Equal magnitudes keep
/// the canonical angle order.
pub fn correction_hints(
    deviations: &AngleMap<f32>,
    target: &AngleMap<f32>,
    user: &AngleMap<f32>,
    options: &FeedbackOptions,
) -> Vec<CorrectionHint> {
    let mut ranked: Vec<(JointAngle, f32)> = deviations.iter().map(|(a, d)| (a, *d)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(options.max_hints)
        .filter(|(_, dev)| *dev >= options.threshold_deg)
        .filter_map(|(angle, _)| {
            let delta = (target.value(angle)? - user.value(angle)?).round();
            let direction = if delta > 0.0 {
                HintDirection::Open
            } else {
                HintDirection::Close
            };
            Some(CorrectionHint {
                angle,
                direction,
                degrees: delta.abs() as u32,
            })
        })
        .collect()
}

/// Text form of [`correction_hints`].
pub fn feedback(
    deviations: &AngleMap<f32>,
    target: &AngleMap<f32>,
    user: &AngleMap<f32>,
    options: &FeedbackOptions,
) -> Vec<String> {
    correction_hints(deviations, target, user, options)
        .iter()
        .map(ToString::to_string)
        .collect()
}
