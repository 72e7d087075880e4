use serde::{Deserialize, Serialize};

use super::defaults;

/// Matching subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// A spatial candidate matches only when its IoU is strictly above this.
    pub spatial_match_threshold: f64,
    /// A matched pair reports a geometry diff when its IoU is below this.
    pub geometry_diff_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            spatial_match_threshold: defaults::DEFAULT_SPATIAL_MATCH_THRESHOLD,
            geometry_diff_threshold: defaults::DEFAULT_GEOMETRY_DIFF_THRESHOLD,
        }
    }
}
