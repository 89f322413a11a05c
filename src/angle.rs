//! Angle utilities shared by the extractor and the scoring stages.

use nalgebra::Point3;

/// Computes the interior angle at vertex `b` formed by the rays `b→a` and
/// `b→c`, in degrees.
///
/// Returns a value in [0, 180]: 0 when the rays point the same way, 180 when
/// they are opposite. If `a` or `c` coincides with `b` the angle is undefined
/// and 0 is returned instead of NaN.
#[inline]
pub fn angle_between(a: &Point3<f32>, b: &Point3<f32>, c: &Point3<f32>) -> f32 {
    let ba = a - b;
    let bc = c - b;
    let na = ba.norm();
    let nc = bc.norm();
    if na == 0.0 || nc == 0.0 {
        return 0.0;
    }
    (ba.dot(&bc) / (na * nc)).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Absolute difference between two angles in degrees.
///
/// Joint angles live in [0, 180] so no wrap-around handling is needed.
#[inline]
pub fn angular_difference_deg(a: f32, b: f32) -> f32 {
    (a - b).abs()
}
