mod common;

use common::synthetic_stream::{oscillating_hold, FRAME_MS};
use pose_evaluator::synthetic::FigureAngles;
use pose_evaluator::{Grade, JointAngle, PoseEvaluator, PoseTarget, ScoringOptions};

fn bent_arms() -> FigureAngles {
    FigureAngles {
        left_elbow: 90.0,
        right_elbow: 90.0,
        ..Default::default()
    }
}

fn bent_arms_target() -> PoseTarget {
    PoseTarget::new(
        [
            (JointAngle::LeftElbow, 90.0),
            (JointAngle::RightElbow, 90.0),
            (JointAngle::LeftKnee, 180.0),
            (JointAngle::RightKnee, 180.0),
        ]
        .into_iter()
        .collect(),
    )
}

fn run_hold(amplitude_deg: f32, frames: usize) -> pose_evaluator::SessionReport {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut evaluator = PoseEvaluator::new(bent_arms_target(), ScoringOptions::default());
    evaluator.begin_hold();
    for (ts, landmarks) in oscillating_hold(bent_arms(), amplitude_deg, frames) {
        evaluator.process(&landmarks, ts);
    }
    evaluator
        .finish_hold_with_diagnostics()
        .expect("hold was active")
}

#[test]
fn steady_hold_grades_excellent() {
    let report = run_hold(0.5, 90);
    assert_eq!(report.result.frames, 90);
    assert!((report.result.duration_ms - 89.0 * FRAME_MS).abs() < 1e-6);
    assert!(report.result.accuracy >= 95, "accuracy={}", report.result.accuracy);
    assert!(report.result.stability >= 95, "stability={}", report.result.stability);
    assert_eq!(report.result.grade, Grade::Excellent);
    assert!(report.result.feedback.is_empty());
}

#[test]
fn wobbling_hold_loses_stability_and_grade() {
    let steady = run_hold(0.5, 90);
    let shaky = run_hold(20.0, 90);
    assert!(shaky.result.stability < steady.result.stability);
    assert!(shaky.trace.stability_factor < 0.7);
    assert!(shaky.result.score < steady.result.score);
    assert_ne!(shaky.result.grade, Grade::Excellent);

    let worst = shaky.trace.least_stable().unwrap();
    assert!(
        matches!(worst.angle, JointAngle::LeftElbow | JointAngle::RightElbow),
        "unexpected least stable angle {:?}",
        worst.angle
    );
}

#[test]
fn single_frame_hold_counts_as_stable() {
    let report = run_hold(0.0, 1);
    assert_eq!(report.result.frames, 1);
    assert_eq!(report.result.stability, 100);
    assert_eq!(report.result.duration_ms, 0.0);
}

#[test]
fn stability_is_per_angle_not_pooled() {
    // Elbows held at very different but constant angles: pooled variance would
    // be huge, per-angle variance is zero.
    let base = FigureAngles {
        left_elbow: 30.0,
        right_elbow: 150.0,
        ..Default::default()
    };
    let mut evaluator = PoseEvaluator::new(bent_arms_target(), ScoringOptions::default());
    evaluator.begin_hold();
    for (ts, landmarks) in oscillating_hold(base, 0.0, 30) {
        evaluator.process(&landmarks, ts);
    }
    let report = evaluator.finish_hold_with_diagnostics().unwrap();
    assert_eq!(report.result.stability, 100);
    for angle in &report.trace.angles {
        assert!(angle.std_dev_deg < 1e-3, "{:?}", angle.angle);
    }
    // Both elbows miss the 90° target by 60°, in opposite directions.
    let feedback = &report.result.feedback;
    assert_eq!(feedback.len(), 2);
    assert!(feedback.contains(&"Open your left elbow by 60°".to_string()));
    assert!(feedback.contains(&"Close your right elbow by 60°".to_string()));
}
