//! Declarative pose definitions.
//!
//! A catalog is a JSON document listing named poses:
//!
//! ```json
//! {
//!   "poses": [
//!     {
//!       "name": "warrior_ii",
//!       "target": {
//!         "angles": { "left_elbow_angle": 175.0, "left_knee_angle": 95.0 },
//!         "tolerances": { "left_knee_angle": 20.0 },
//!         "weights": { "left_knee_angle": 2.0 }
//!       },
//!       "steps": ["Step wide", "Bend the front knee"],
//!       "tips": ["Keep the torso upright"],
//!       "hold_duration_secs": 20.0
//!     }
//!   ]
//! }
//! ```
//!
//! Only `target` feeds the scorer. Angles without a tolerance or weight fall
//! back to [`ScoringOptions`](crate::scoring::ScoringOptions) defaults.

use crate::joints::{AngleMap, JointAngle};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn default_hold_duration_secs() -> f32 {
    30.0
}

/// The scoring-relevant part of a pose: target angles plus optional
/// per-angle tolerances (degrees) and weights.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseTarget {
    pub angles: AngleMap<f32>,
    #[serde(default)]
    pub tolerances: AngleMap<f32>,
    #[serde(default)]
    pub weights: AngleMap<f32>,
}

impl PoseTarget {
    pub fn new(angles: AngleMap<f32>) -> Self {
        Self {
            angles,
            ..Default::default()
        }
    }

    #[inline]
    pub fn tolerance(&self, angle: JointAngle, default: f32) -> f32 {
        self.tolerances.value(angle).unwrap_or(default)
    }

    #[inline]
    pub fn weight(&self, angle: JointAngle, default: f32) -> f32 {
        self.weights.value(angle).unwrap_or(default)
    }
}

/// One named pose with its presentation metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseDefinition {
    pub name: String,
    pub target: PoseTarget,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    /// How long the pose should be held before the host finishes the hold.
    #[serde(default = "default_hold_duration_secs")]
    pub hold_duration_secs: f32,
}

impl PoseDefinition {
    pub fn hold_duration_ms(&self) -> f64 {
        f64::from(self.hold_duration_secs) * 1000.0
    }
}

/// Read-only collection of pose definitions, loaded once.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PoseCatalog {
    poses: Vec<PoseDefinition>,
}

impl PoseCatalog {
    pub fn new(poses: Vec<PoseDefinition>) -> Result<Self, String> {
        let mut seen = HashSet::new();
        for pose in &poses {
            if !seen.insert(pose.name.as_str()) {
                return Err(format!("Duplicate pose '{}' in catalog", pose.name));
            }
        }
        Ok(Self { poses })
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let raw: PoseCatalog =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse pose catalog: {e}"))?;
        Self::new(raw.poses)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read pose catalog {}: {e}", path.display()))?;
        let catalog = Self::from_json_str(&contents)
            .map_err(|e| format!("{e} ({})", path.display()))?;
        debug!(
            "PoseCatalog::load {} poses from {}",
            catalog.poses.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&PoseDefinition> {
        self.poses.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.poses.iter().map(|p| p.name.as_str())
    }

    pub fn poses(&self) -> &[PoseDefinition] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
