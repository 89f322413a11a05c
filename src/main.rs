use pose_evaluator::synthetic::figure_with_elbows;
use pose_evaluator::{JointAngle, PoseEvaluator, PoseTarget, ScoringOptions};

fn main() {
    // Demo stub: scores a synthetic figure against an arms-bent target
    let target = PoseTarget::new(
        [(JointAngle::LeftElbow, 90.0), (JointAngle::RightElbow, 90.0)]
            .into_iter()
            .collect(),
    );
    let mut evaluator = PoseEvaluator::new(target, ScoringOptions::default());

    let landmarks = figure_with_elbows(170.0, 95.0);
    let eval = evaluator.process(&landmarks, 0.0);
    println!("similarity={}%", eval.similarity_percent);
    for hint in evaluator.live_hints() {
        println!("  {hint}");
    }
}
