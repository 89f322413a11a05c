//! I/O helpers for JSON documents and recorded landmark streams.
//!
//! - `read_json_file`: parse any deserializable value from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `load_recording`: read a recorded stream of timestamped landmark sets.
use crate::landmarks::LandmarkSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One frame of a recorded detector stream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub timestamp_ms: f64,
    pub landmarks: LandmarkSet,
}

/// Parse a JSON file into `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Load a recorded stream; frames must be in non-decreasing timestamp order.
pub fn load_recording(path: &Path) -> Result<Vec<RecordedFrame>, String> {
    let frames: Vec<RecordedFrame> = read_json_file(path)?;
    if let Some(i) = frames
        .windows(2)
        .position(|w| w[1].timestamp_ms < w[0].timestamp_ms)
    {
        return Err(format!(
            "Recording {} is out of order at frame {}",
            path.display(),
            i + 1
        ));
    }
    Ok(frames)
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
