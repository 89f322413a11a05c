use serde::{Deserialize, Serialize};

/// Time spent in one evaluation stage, summed over every frame of a hold.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for a hold.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Adds `elapsed_ms` to the stage named `label`, creating it on first use.
    pub fn accumulate(&mut self, label: &str, elapsed_ms: f64) {
        match self.stages.iter_mut().find(|s| s.label == label) {
            Some(stage) => stage.elapsed_ms += elapsed_ms,
            None => self.stages.push(StageTiming::new(label, elapsed_ms)),
        }
        self.total_ms += elapsed_ms;
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}
