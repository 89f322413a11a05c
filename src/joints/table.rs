use super::JointAngle;
use crate::landmarks::JointIndex;

/// Three landmarks spanning one joint angle; the vertex is the middle joint.
#[derive(Clone, Copy, Debug)]
pub struct JointTriplet {
    pub angle: JointAngle,
    pub joints: [JointIndex; 3],
}

const fn triplet(angle: JointAngle, a: JointIndex, vertex: JointIndex, c: JointIndex) -> JointTriplet {
    JointTriplet {
        angle,
        joints: [a, vertex, c],
    }
}

/// Anatomical definition of every tracked angle, in [`JointAngle::ALL`] order.
///
/// - shoulder: wrist – shoulder – hip
/// - elbow: shoulder – elbow – wrist
/// - hip: shoulder – hip – knee
/// - knee: hip – knee – ankle
pub const JOINT_TRIPLETS: [JointTriplet; JointAngle::COUNT] = [
    triplet(JointAngle::LeftShoulder, JointIndex::LeftWrist, JointIndex::LeftShoulder, JointIndex::LeftHip),
    triplet(JointAngle::RightShoulder, JointIndex::RightWrist, JointIndex::RightShoulder, JointIndex::RightHip),
    triplet(JointAngle::LeftElbow, JointIndex::LeftShoulder, JointIndex::LeftElbow, JointIndex::LeftWrist),
    triplet(JointAngle::RightElbow, JointIndex::RightShoulder, JointIndex::RightElbow, JointIndex::RightWrist),
    triplet(JointAngle::LeftHip, JointIndex::LeftShoulder, JointIndex::LeftHip, JointIndex::LeftKnee),
    triplet(JointAngle::RightHip, JointIndex::RightShoulder, JointIndex::RightHip, JointIndex::RightKnee),
    triplet(JointAngle::LeftKnee, JointIndex::LeftHip, JointIndex::LeftKnee, JointIndex::LeftAnkle),
    triplet(JointAngle::RightKnee, JointIndex::RightHip, JointIndex::RightKnee, JointIndex::RightAnkle),
];
