//! Euclidean cluster extraction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::Vec3;
use hashbrown::HashMap;

use crate::cell::CellCoord;
use crate::error::{ClusterError, Result};

/// Parameters for cluster extraction.
///
/// # Example
///
/// ```
/// use fusion_cluster::ClusterParams;
///
/// let params = ClusterParams::new(0.5, 100, 25_000);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusterParams {
    /// Maximum neighbor distance for two points to share a cluster.
    pub tolerance: f32,
    /// Smallest cluster size that is kept.
    pub min_size: usize,
    /// Largest cluster size that is kept.
    pub max_size: usize,
}

impl ClusterParams {
    /// Creates new cluster parameters.
    #[must_use]
    pub const fn new(tolerance: f32, min_size: usize, max_size: usize) -> Self {
        Self {
            tolerance,
            min_size,
            max_size,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not a positive finite distance
    /// or if `min_size > max_size`.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ClusterError::invalid_tolerance(self.tolerance));
        }
        if self.min_size > self.max_size {
            return Err(ClusterError::invalid_size_bounds(
                self.min_size,
                self.max_size,
            ));
        }
        Ok(())
    }
}

/// A cluster of points with its centroid.
///
/// Transient: lives only between extraction and box estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCluster {
    points: Vec<Vec3>,
    centroid: Vec3,
}

impl PointCluster {
    /// Builds a cluster from its member points.
    ///
    /// Returns `None` for an empty member set, which has no centroid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_points(points: Vec<Vec3>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let sum: Vec3 = points.iter().copied().sum();
        let centroid = sum / points.len() as f32;
        Some(Self { points, centroid })
    }

    /// Returns the member points.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Returns the arithmetic mean position of the members.
    #[must_use]
    pub const fn centroid(&self) -> Vec3 {
        self.centroid
    }

    /// Returns the number of member points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if the cluster has no members (never true for extracted clusters).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the cluster and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}

/// Partitions a point set into Euclidean clusters.
///
/// Region growing over a cell index: points are binned into cells of edge
/// length `tolerance`, so any neighbor within tolerance lives in one of the
/// 27 cells around a point. Candidates from those cells are verified with an
/// exact distance test. Clusters outside `[min_size, max_size]` are
/// discarded. Non-finite input points are ignored.
///
/// Returns clusters in growth order; callers must not rely on any
/// particular ordering among them.
///
/// # Errors
///
/// Returns an error only for invalid parameters; an input that yields no
/// qualifying cluster produces an empty vector.
///
/// # Example
///
/// ```
/// use fusion_cluster::{ClusterParams, extract_clusters};
/// use glam::Vec3;
///
/// let points = vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(0.1, 0.0, 0.0),
///     Vec3::new(5.0, 0.0, 0.0),
/// ];
/// let clusters = extract_clusters(&points, &ClusterParams::new(0.5, 1, 100)).unwrap();
/// assert_eq!(clusters.len(), 2);
/// ```
pub fn extract_clusters(points: &[Vec3], params: &ClusterParams) -> Result<Vec<PointCluster>> {
    params.validate()?;

    let valid: Vec<Vec3> = points.iter().copied().filter(|p| p.is_finite()).collect();
    if valid.is_empty() {
        return Ok(Vec::new());
    }

    let mut index: HashMap<CellCoord, Vec<u32>> = HashMap::new();
    for (i, point) in valid.iter().enumerate() {
        let coord = CellCoord::from_position(*point, params.tolerance);
        #[allow(clippy::cast_possible_truncation)]
        index.entry(coord).or_default().push(i as u32);
    }

    let tolerance_sq = params.tolerance * params.tolerance;
    let mut visited = vec![false; valid.len()];
    let mut clusters = Vec::new();
    let mut queue = Vec::new();

    for seed in 0..valid.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;
        queue.push(seed);

        let mut members = Vec::new();
        while let Some(i) = queue.pop() {
            members.push(valid[i]);

            let coord = CellCoord::from_position(valid[i], params.tolerance);
            for neighbor_cell in coord.neighborhood() {
                let Some(candidates) = index.get(&neighbor_cell) else {
                    continue;
                };
                for &j in candidates {
                    let j = j as usize;
                    if !visited[j] && valid[i].distance_squared(valid[j]) <= tolerance_sq {
                        visited[j] = true;
                        queue.push(j);
                    }
                }
            }
        }

        if members.len() >= params.min_size && members.len() <= params.max_size {
            if let Some(cluster) = PointCluster::from_points(members) {
                clusters.push(cluster);
            }
        }
    }

    Ok(clusters)
}
