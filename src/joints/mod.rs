//! Joint-angle vocabulary and extraction from skeletal landmarks.
//!
//! Every tracked angle is the interior angle at a middle joint formed by two
//! adjacent segments. The triplet table in `table` is the only place these
//! anatomical definitions live; pose-authoring tools must use the same table
//! so that target angles mean the same thing as measured ones.
//!
//! - [`JointAngle`] – closed vocabulary of the eight tracked angles, with the
//!   canonical string keys used by pose catalogs (`left_elbow_angle`, ...).
//! - [`AngleMap`] – dense map keyed by [`JointAngle`]. Iteration follows the
//!   declaration order of the enum, which keeps rankings deterministic.
//! - [`extract_angles`] – evaluates the table against one [`LandmarkSet`].

mod angle_map;
mod table;

pub use angle_map::AngleMap;
pub use table::{JointTriplet, JOINT_TRIPLETS};

use crate::angle::angle_between;
use crate::landmarks::LandmarkSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tracked joint angles. Declaration order is the canonical iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JointAngle {
    #[serde(rename = "left_shoulder_angle")]
    LeftShoulder,
    #[serde(rename = "right_shoulder_angle")]
    RightShoulder,
    #[serde(rename = "left_elbow_angle")]
    LeftElbow,
    #[serde(rename = "right_elbow_angle")]
    RightElbow,
    #[serde(rename = "left_hip_angle")]
    LeftHip,
    #[serde(rename = "right_hip_angle")]
    RightHip,
    #[serde(rename = "left_knee_angle")]
    LeftKnee,
    #[serde(rename = "right_knee_angle")]
    RightKnee,
}

impl JointAngle {
    pub const COUNT: usize = 8;

    pub const ALL: [JointAngle; Self::COUNT] = [
        JointAngle::LeftShoulder,
        JointAngle::RightShoulder,
        JointAngle::LeftElbow,
        JointAngle::RightElbow,
        JointAngle::LeftHip,
        JointAngle::RightHip,
        JointAngle::LeftKnee,
        JointAngle::RightKnee,
    ];

    /// Left/right pairs compared by the symmetry analyzer.
    pub const SYMMETRIC_PAIRS: [(JointAngle, JointAngle); 4] = [
        (JointAngle::LeftShoulder, JointAngle::RightShoulder),
        (JointAngle::LeftElbow, JointAngle::RightElbow),
        (JointAngle::LeftHip, JointAngle::RightHip),
        (JointAngle::LeftKnee, JointAngle::RightKnee),
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical catalog key.
    pub fn as_str(self) -> &'static str {
        match self {
            JointAngle::LeftShoulder => "left_shoulder_angle",
            JointAngle::RightShoulder => "right_shoulder_angle",
            JointAngle::LeftElbow => "left_elbow_angle",
            JointAngle::RightElbow => "right_elbow_angle",
            JointAngle::LeftHip => "left_hip_angle",
            JointAngle::RightHip => "right_hip_angle",
            JointAngle::LeftKnee => "left_knee_angle",
            JointAngle::RightKnee => "right_knee_angle",
        }
    }

    /// Human-readable joint label derived from the key:
    /// `left_elbow_angle` → `left elbow`.
    pub fn label(self) -> String {
        self.as_str()
            .replace('_', " ")
            .replace("angle", "")
            .trim()
            .to_string()
    }
}

impl fmt::Display for JointAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JointAngle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JointAngle::ALL
            .iter()
            .copied()
            .find(|angle| angle.as_str() == s)
            .ok_or_else(|| format!("Unknown joint angle '{s}'"))
    }
}

/// Measures every angle of the triplet table on one frame.
///
/// `landmarks` must follow the canonical joint indexing; all eight angles are
/// always present in the result.
pub fn extract_angles(landmarks: &LandmarkSet) -> AngleMap<f32> {
    let mut angles = AngleMap::new();
    for triplet in JOINT_TRIPLETS.iter() {
        let [a, b, c] = triplet.joints;
        let deg = angle_between(&landmarks[a], &landmarks[b], &landmarks[c]);
        angles.insert(triplet.angle, deg);
    }
    angles
}
