//! Cluster selection.

use fusion_cluster::{ClusterParams, PointCluster, extract_clusters};
use glam::Vec3;
use tracing::warn;

/// Clusters a frustum subset and picks the cluster nearest the sensor.
///
/// "Nearest" means minimum Euclidean norm of the cluster centroid: a
/// frustum usually also captures background clutter behind the object, and
/// the object itself is the closest coherent mass of points. Among
/// exact-tie centroids the first extracted cluster wins; callers must not
/// rely on which one that is.
///
/// Returns `None` when no cluster satisfies the size bounds, which drops
/// the detection. That outcome is frequent and expected, not an error.
#[must_use]
pub fn select_nearest_cluster(points: &[Vec3], params: &ClusterParams) -> Option<PointCluster> {
    let clusters = match extract_clusters(points, params) {
        Ok(clusters) => clusters,
        Err(err) => {
            // Parameters are validated at pipeline construction; getting
            // here means a caller bypassed that, so drop the detection.
            warn!(error = %err, "cluster extraction rejected parameters");
            return None;
        }
    };

    clusters.into_iter().min_by(|a, b| {
        a.centroid()
            .length()
            .partial_cmp(&b.centroid().length())
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}
