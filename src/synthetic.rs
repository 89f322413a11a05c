//! Synthetic landmark sets for demos and tests.
//!
//! Builds an upright, camera-facing figure (z = 0) whose elbow and knee angles
//! are set exactly; hips stay straight above the knees. Coordinates are in
//! normalized units with the ankles at y = 0 (before knee bend).

use crate::landmarks::{JointIndex, LandmarkSet};
use nalgebra::Point3;

const SHOULDER_Y: f32 = 1.5;
const ELBOW_Y: f32 = 1.2;
const HIP_Y: f32 = 1.0;
const KNEE_Y: f32 = 0.5;
const FOREARM: f32 = 0.3;
const SHIN: f32 = 0.5;
const HALF_WIDTH: f32 = 0.2;

/// Interior angles (degrees) of the joints the figure can bend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureAngles {
    pub left_elbow: f32,
    pub right_elbow: f32,
    pub left_knee: f32,
    pub right_knee: f32,
}

impl Default for FigureAngles {
    /// Arms hanging straight, legs straight.
    fn default() -> Self {
        Self {
            left_elbow: 180.0,
            right_elbow: 180.0,
            left_knee: 180.0,
            right_knee: 180.0,
        }
    }
}

struct Side {
    sign: f32,
    shoulder: JointIndex,
    elbow: JointIndex,
    wrist: JointIndex,
    hip: JointIndex,
    knee: JointIndex,
    ankle: JointIndex,
}

const LEFT: Side = Side {
    sign: -1.0,
    shoulder: JointIndex::LeftShoulder,
    elbow: JointIndex::LeftElbow,
    wrist: JointIndex::LeftWrist,
    hip: JointIndex::LeftHip,
    knee: JointIndex::LeftKnee,
    ankle: JointIndex::LeftAnkle,
};

const RIGHT: Side = Side {
    sign: 1.0,
    shoulder: JointIndex::RightShoulder,
    elbow: JointIndex::RightElbow,
    wrist: JointIndex::RightWrist,
    hip: JointIndex::RightHip,
    knee: JointIndex::RightKnee,
    ankle: JointIndex::RightAnkle,
};

/// Builds the figure. The remaining joints (face, hands, feet) sit near the
/// body so the set stays plausible, but no tracked angle depends on them.
pub fn figure(angles: FigureAngles) -> LandmarkSet {
    let mut set = LandmarkSet::zeros();
    set.set(JointIndex::Nose, Point3::new(0.0, 1.75, 0.0));
    for (side, elbow_deg, knee_deg) in [
        (&LEFT, angles.left_elbow, angles.left_knee),
        (&RIGHT, angles.right_elbow, angles.right_knee),
    ] {
        let x = HALF_WIDTH * side.sign;
        let elbow = Point3::new(x, ELBOW_Y, 0.0);
        let knee = Point3::new(x, KNEE_Y, 0.0);
        set.set(side.shoulder, Point3::new(x, SHOULDER_Y, 0.0));
        set.set(side.elbow, elbow);
        set.set(side.wrist, bend(&elbow, elbow_deg, FOREARM, side.sign));
        set.set(side.hip, Point3::new(x, HIP_Y, 0.0));
        set.set(side.knee, knee);
        set.set(side.ankle, bend(&knee, knee_deg, SHIN, side.sign));
    }
    set
}

/// Figure with only the elbows bent.
pub fn figure_with_elbows(left_elbow: f32, right_elbow: f32) -> LandmarkSet {
    figure(FigureAngles {
        left_elbow,
        right_elbow,
        ..Default::default()
    })
}

/// Places the distal joint so that the angle between "up" (toward the
/// proximal joint) and the distal segment equals `deg`, bending outward.
fn bend(vertex: &Point3<f32>, deg: f32, length: f32, sign: f32) -> Point3<f32> {
    let theta = deg.to_radians();
    Point3::new(
        vertex.x + sign * length * theta.sin(),
        vertex.y + length * theta.cos(),
        vertex.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angle_between;

    #[test]
    fn requested_angles_are_reproduced() {
        let set = figure(FigureAngles {
            left_elbow: 45.0,
            right_elbow: 120.0,
            left_knee: 95.0,
            right_knee: 160.0,
        });
        let check = |a, b, c, expected: f32| {
            let got = angle_between(&set[a], &set[b], &set[c]);
            assert!((got - expected).abs() < 0.05, "expected {expected}, got {got}");
        };
        check(JointIndex::LeftShoulder, JointIndex::LeftElbow, JointIndex::LeftWrist, 45.0);
        check(JointIndex::RightShoulder, JointIndex::RightElbow, JointIndex::RightWrist, 120.0);
        check(JointIndex::LeftHip, JointIndex::LeftKnee, JointIndex::LeftAnkle, 95.0);
        check(JointIndex::RightHip, JointIndex::RightKnee, JointIndex::RightAnkle, 160.0);
    }
}
