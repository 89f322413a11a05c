use pose_evaluator::synthetic::{figure, FigureAngles};
use pose_evaluator::LandmarkSet;

/// Frame interval of a 30 fps detector.
pub const FRAME_MS: f64 = 1000.0 / 30.0;

/// Generates `count` timestamped frames oscillating around `base`.
///
/// Every bendable joint swings by `amplitude_deg * sin(0.7 * i)`, a cheap
/// deterministic stand-in for detector jitter or a wobbling user.
pub fn oscillating_hold(
    base: FigureAngles,
    amplitude_deg: f32,
    count: usize,
) -> Vec<(f64, LandmarkSet)> {
    assert!(count > 0, "stream must contain at least one frame");
    (0..count)
        .map(|i| {
            let wobble = amplitude_deg * (0.7 * i as f32).sin();
            let angles = FigureAngles {
                left_elbow: (base.left_elbow + wobble).clamp(0.0, 180.0),
                right_elbow: (base.right_elbow - wobble).clamp(0.0, 180.0),
                left_knee: (base.left_knee - wobble.abs()).clamp(0.0, 180.0),
                right_knee: (base.right_knee - wobble.abs()).clamp(0.0, 180.0),
            };
            (i as f64 * FRAME_MS, figure(angles))
        })
        .collect()
}
