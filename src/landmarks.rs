//! Canonical body-joint indexing and the per-frame landmark container.
//!
//! The detector emits 33 points per frame in a fixed order. Index meaning is
//! shared by every consumer, so joints are addressed through [`JointIndex`]
//! rather than raw integers.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Number of landmarks in a canonical body pose.
pub const LANDMARK_COUNT: usize = 33;

/// Canonical 33-joint body topology (face, upper body, hands, lower body, feet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum JointIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl JointIndex {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One frame of detector output: exactly [`LANDMARK_COUNT`] points.
///
/// The length is validated once when the set is built; downstream stages
/// index it without further checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3<f32>>", into = "Vec<Point3<f32>>")]
pub struct LandmarkSet {
    points: Vec<Point3<f32>>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point3<f32>>) -> Result<Self, String> {
        if points.len() != LANDMARK_COUNT {
            return Err(format!(
                "Expected {LANDMARK_COUNT} landmarks, got {}",
                points.len()
            ));
        }
        Ok(Self { points })
    }

    /// All joints placed at the origin; handy as a template for synthetic poses.
    pub fn zeros() -> Self {
        Self {
            points: vec![Point3::origin(); LANDMARK_COUNT],
        }
    }

    pub fn set(&mut self, joint: JointIndex, point: Point3<f32>) {
        self.points[joint.index()] = point;
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }
}

impl Index<JointIndex> for LandmarkSet {
    type Output = Point3<f32>;

    fn index(&self, joint: JointIndex) -> &Self::Output {
        &self.points[joint.index()]
    }
}

impl TryFrom<Vec<Point3<f32>>> for LandmarkSet {
    type Error = String;

    fn try_from(points: Vec<Point3<f32>>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LandmarkSet> for Vec<Point3<f32>> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}
