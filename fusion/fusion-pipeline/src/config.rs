//! Pipeline configuration.

use fusion_cluster::ClusterParams;
use fusion_types::{Duration, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::{FusionError, Result};

/// Tunable parameters for the fusion pipeline.
///
/// All fields have defaults matching the reference deployment, so a config
/// loaded from a partial document only needs to name the overrides.
///
/// # Example
///
/// ```
/// use fusion_pipeline::FusionConfig;
///
/// let config: FusionConfig = serde_json::from_str(r#"{"cluster_tolerance": 0.3}"#).unwrap();
/// assert!((config.cluster_tolerance - 0.3).abs() < 1e-6);
/// assert_eq!(config.min_cluster_size, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Maximum neighbor distance (meters) for two points to share a cluster.
    pub cluster_tolerance: f32,
    /// Smallest cluster (point count) considered a detection candidate.
    pub min_cluster_size: usize,
    /// Largest cluster (point count) considered a detection candidate.
    pub max_cluster_size: usize,
    /// Fill color for detection markers.
    pub marker_color: Rgba,
    /// Display lifetime for detection markers.
    pub marker_lifetime: Duration,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            cluster_tolerance: 0.5,
            min_cluster_size: 100,
            max_cluster_size: 25_000,
            marker_color: Rgba::new(0.0, 1.0, 0.0, 0.5),
            marker_lifetime: Duration::from_millis(500),
        }
    }
}

impl FusionConfig {
    /// Returns the clustering parameters portion of the config.
    #[must_use]
    pub const fn cluster_params(&self) -> ClusterParams {
        ClusterParams::new(
            self.cluster_tolerance,
            self.min_cluster_size,
            self.max_cluster_size,
        )
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidConfig`] if the clustering parameters
    /// are rejected.
    pub fn validate(&self) -> Result<()> {
        self.cluster_params()
            .validate()
            .map_err(|err| FusionError::invalid_config(err.to_string()))
    }
}
