use crate::scoring::ScoringOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Where to write the JSON session report; stdout when absent.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HoldDemoConfig {
    pub catalog: PathBuf,
    pub pose: String,
    pub recording: PathBuf,
    #[serde(default)]
    pub scoring: ScoringOptions,
    /// Replaces the catalog's hold duration when set.
    #[serde(default)]
    pub hold_duration_override_secs: Option<f32>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl HoldDemoConfig {
    /// Relative paths in the config are resolved against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        for path in [&mut self.catalog, &mut self.recording] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        if let Some(out) = self.output.json_out.as_mut() {
            if out.is_relative() {
                *out = base.join(&*out);
            }
        }
        self
    }
}

pub fn load_config(path: &Path) -> Result<HoldDemoConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: HoldDemoConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base))
}
