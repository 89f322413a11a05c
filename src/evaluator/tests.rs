use super::*;
use crate::catalog::PoseTarget;
use crate::joints::{AngleMap, JointAngle};
use crate::scoring::{Grade, HintDirection, ScoringOptions};
use crate::synthetic::figure_with_elbows;

fn elbow_target(left: f32, right: f32) -> PoseTarget {
    let angles: AngleMap<f32> = [(JointAngle::LeftElbow, left), (JointAngle::RightElbow, right)]
        .into_iter()
        .collect();
    PoseTarget::new(angles)
}

#[test]
fn frames_outside_a_hold_are_not_recorded() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    let eval = evaluator.process(&figure_with_elbows(90.0, 90.0), 0.0);
    assert_eq!(eval.similarity_percent, 100);
    assert!(!evaluator.is_holding());
    assert_eq!(evaluator.frames_in_hold(), 0);
    assert!(evaluator.finish_hold().is_none());
}

#[test]
fn live_evaluation_reports_deviations() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    let eval = evaluator.process(&figure_with_elbows(105.0, 90.0), 16.0);
    let dev = eval.deviations.value(JointAngle::LeftElbow).unwrap();
    assert!((dev - 15.0).abs() < 0.05);
    // (0.5 + 1.0) / 2
    assert_eq!(eval.similarity_percent, 75);
    assert_eq!(eval.deviations.len(), 2);

    let hints = evaluator.live_hints();
    assert_eq!(hints.len(), 1);
    assert_eq!(hints[0].angle, JointAngle::LeftElbow);
    assert_eq!(hints[0].direction, HintDirection::Close);
    assert_eq!(hints[0].degrees, 15);
}

#[test]
fn hold_lifecycle_produces_result() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    evaluator.begin_hold();
    for i in 0..30 {
        evaluator.process(&figure_with_elbows(90.0, 90.0), i as f64 * 33.0);
    }
    assert_eq!(evaluator.frames_in_hold(), 30);
    assert_eq!(evaluator.hold_elapsed_ms(), 29.0 * 33.0);

    let result = evaluator.finish_hold().expect("hold was active");
    assert_eq!(result.frames, 30);
    assert_eq!(result.accuracy, 100);
    assert_eq!(result.stability, 100);
    assert_eq!(result.symmetry, 100);
    assert_eq!(result.grade, Grade::Excellent);
    assert!(!evaluator.is_holding());
}

#[test]
fn reset_discards_the_hold() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    evaluator.begin_hold();
    evaluator.process(&figure_with_elbows(90.0, 90.0), 0.0);
    evaluator.reset();
    assert!(!evaluator.is_holding());
    assert!(evaluator.last_evaluation().is_none());
    assert!(evaluator.finish_hold().is_none());
}

#[test]
fn begin_hold_restarts_accumulation() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    evaluator.begin_hold();
    evaluator.process(&figure_with_elbows(10.0, 10.0), 0.0);
    evaluator.begin_hold();
    evaluator.process(&figure_with_elbows(90.0, 90.0), 100.0);
    let result = evaluator.finish_hold().unwrap();
    assert_eq!(result.frames, 1);
    assert_eq!(result.accuracy, 100);
}

#[test]
fn diagnostics_trace_matches_result() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    evaluator.begin_hold();
    for (i, elbow) in [85.0f32, 95.0, 85.0, 95.0].into_iter().enumerate() {
        evaluator.process(&figure_with_elbows(elbow, 90.0), i as f64 * 40.0);
    }
    let report = evaluator.finish_hold_with_diagnostics().unwrap();
    assert_eq!(report.trace.frames, 4);
    assert_eq!(report.trace.timeline.len(), 4);
    assert_eq!(report.trace.angles.len(), JointAngle::COUNT);
    assert_eq!(report.result.score, report.trace.session_score.round() as u32);

    let worst = report.trace.least_stable().unwrap();
    assert_eq!(worst.angle, JointAngle::LeftElbow);
    assert!((worst.std_dev_deg - 5.0).abs() < 0.05);
    assert!(report.trace.timings.stage_ms("extract").is_some());
    assert!(report.trace.timings.stage_ms("finish").is_some());
}

#[test]
fn changing_target_drops_live_hold() {
    let mut evaluator = PoseEvaluator::new(elbow_target(90.0, 90.0), ScoringOptions::default());
    evaluator.begin_hold();
    evaluator.process(&figure_with_elbows(90.0, 90.0), 0.0);
    evaluator.set_target(elbow_target(45.0, 45.0));
    assert!(!evaluator.is_holding());
    let eval = evaluator.process(&figure_with_elbows(45.0, 45.0), 10.0);
    assert_eq!(eval.similarity_percent, 100);
}
