use crate::joints::{AngleMap, JointAngle};

/// Left/right agreement of a single frame as an integer percentage.
///
/// Each of the four joint pairs with both sides present contributes
/// `max(0, 1 - |left - right| / 180)`. Pairs missing a side are left out of
/// the average entirely; with no complete pair the result is 0.
pub fn symmetry(angles: &AngleMap<f32>) -> u32 {
    let mut sum = 0.0f32;
    let mut pairs = 0usize;
    for (left, right) in JointAngle::SYMMETRIC_PAIRS {
        if let (Some(l), Some(r)) = (angles.value(left), angles.value(right)) {
            sum += (1.0 - (l - r).abs() / 180.0).max(0.0);
            pairs += 1;
        }
    }
    if pairs == 0 {
        return 0;
    }
    super::to_percent(sum / pairs as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_frame_is_fully_symmetric() {
        let angles: AngleMap<f32> = JointAngle::SYMMETRIC_PAIRS
            .iter()
            .enumerate()
            .flat_map(|(i, (l, r))| {
                let deg = 40.0 + 30.0 * i as f32;
                [(*l, deg), (*r, deg)]
            })
            .collect();
        assert_eq!(symmetry(&angles), 100);
    }

    #[test]
    fn no_complete_pair_is_zero() {
        let mut angles = AngleMap::new();
        assert_eq!(symmetry(&angles), 0);
        angles.insert(JointAngle::LeftElbow, 90.0);
        angles.insert(JointAngle::RightKnee, 90.0);
        assert_eq!(symmetry(&angles), 0);
    }

    #[test]
    fn incomplete_pairs_are_excluded_from_average() {
        let mut angles = AngleMap::new();
        angles.insert(JointAngle::LeftElbow, 170.0);
        angles.insert(JointAngle::RightElbow, 80.0);
        angles.insert(JointAngle::LeftKnee, 10.0);
        // Only the elbow pair counts: 1 - 90/180.
        assert_eq!(symmetry(&angles), 50);
    }

    #[test]
    fn averages_and_rounds_across_pairs() {
        let mut angles = AngleMap::new();
        angles.insert(JointAngle::LeftShoulder, 90.0);
        angles.insert(JointAngle::RightShoulder, 90.0);
        angles.insert(JointAngle::LeftHip, 0.0);
        angles.insert(JointAngle::RightHip, 180.0);
        angles.insert(JointAngle::LeftKnee, 100.0);
        angles.insert(JointAngle::RightKnee, 97.0);
        // (1 + 0 + (1 - 3/180)) / 3 = 0.6611
        assert_eq!(symmetry(&angles), 66);
    }
}
