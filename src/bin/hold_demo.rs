use pose_evaluator::config::hold_demo::{self, OutputFormat};
use pose_evaluator::io::{load_recording, write_json_file};
use pose_evaluator::{PoseCatalog, PoseEvaluator, SessionReport};
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "hold_demo".to_string());
    format!("Usage: {program} <config.json>")
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = hold_demo::load_config(Path::new(&config_path))?;

    let catalog = PoseCatalog::load(&config.catalog)?;
    let pose = catalog.get(&config.pose).ok_or_else(|| {
        let known: Vec<_> = catalog.names().collect();
        format!(
            "Pose '{}' not found in {} (known: {})",
            config.pose,
            config.catalog.display(),
            known.join(", ")
        )
    })?;
    let hold_ms = config
        .hold_duration_override_secs
        .map(|s| f64::from(s) * 1000.0)
        .unwrap_or_else(|| pose.hold_duration_ms());

    let frames = load_recording(&config.recording)?;
    if frames.is_empty() {
        return Err(format!("Recording {} has no frames", config.recording.display()));
    }

    let mut evaluator = PoseEvaluator::new(pose.target.clone(), config.scoring.clone());
    evaluator.begin_hold();
    for frame in &frames {
        evaluator.process(&frame.landmarks, frame.timestamp_ms);
        if evaluator.hold_elapsed_ms() >= hold_ms {
            break;
        }
    }
    let completed = evaluator.hold_elapsed_ms() >= hold_ms;
    let report = evaluator
        .finish_hold_with_diagnostics()
        .ok_or("Hold was not active")?;

    if config.output.format.includes_text() {
        print_text_summary(&pose.name, &report, completed, hold_ms);
    }

    if config.output.format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report)?;
            if config.output.format.includes_text() {
                println!("\nJSON report written to {}", path.display());
            } else {
                println!("JSON report written to {}", path.display());
            }
        } else {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if config.output.format == OutputFormat::Both {
                println!("\nJSON report:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    Ok(())
}

fn print_text_summary(pose: &str, report: &SessionReport, completed: bool, hold_ms: f64) {
    let res = &report.result;
    let trace = &report.trace;
    println!("Hold summary: {pose}");
    println!(
        "  frames: {} over {:.0} ms ({})",
        res.frames,
        res.duration_ms,
        if completed {
            "completed".to_string()
        } else {
            format!("ended early, target {hold_ms:.0} ms")
        }
    );
    println!("  accuracy:  {:>3}%", res.accuracy);
    println!("  stability: {:>3}%", res.stability);
    println!("  symmetry:  {:>3}%", res.symmetry);
    println!("  score:     {:>3}  grade: {}", res.score, res.grade);

    if res.feedback.is_empty() {
        println!("\nFeedback: none, final frame within tolerance");
    } else {
        println!("\nFeedback");
        for line in &res.feedback {
            println!("  - {line}");
        }
    }

    println!("\nPer-angle stability");
    for a in &trace.angles {
        println!(
            "  {:<22} n={:<4} mean={:>6.1}° std={:>5.2}° stability={:.3}",
            a.angle.as_str(),
            a.samples,
            a.mean_deg,
            a.std_dev_deg,
            a.stability
        );
    }
    if let Some(worst) = trace.least_stable() {
        println!("  least stable: {}", worst.angle.label());
    }

    println!(
        "\nTimings (ms): extract={} similarity={} finish={} total={:.3}",
        format_opt(trace.timings.stage_ms("extract")),
        format_opt(trace.timings.stage_ms("similarity")),
        format_opt(trace.timings.stage_ms("finish")),
        trace.timings.total_ms
    );
}

fn format_opt(val: Option<f64>) -> String {
    val.map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "-".to_string())
}
