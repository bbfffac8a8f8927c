//! Bearing-aligned oriented box estimation.

use fusion_cluster::PointCluster;
use fusion_types::OrientedBox3d;
use glam::{Quat, Vec3};

/// Estimates an oriented bounding box for a cluster by aligning it with
/// the sensor's bearing toward the cluster.
///
/// The yaw that zeroes the centroid's lateral offset,
/// `theta = -atan2(c.y, sqrt(c.x^2 + c.z^2))`, is applied about the up
/// axis; the rotated points get a plain axis-aligned min/max bound, and
/// the box is carried back with the inverse rotation as its orientation.
/// For a single-axis bearing change this is tighter than bounding in the
/// sensor frame directly. Only yaw is corrected; object pitch/roll are
/// deliberately not modeled.
///
/// A cluster flat along an axis yields a zero size component. Degenerate
/// inputs may produce non-finite components; those are tolerated here and
/// filtered at the marker stage.
///
/// # Example
///
/// ```
/// use fusion_cluster::PointCluster;
/// use fusion_pipeline::bearing_aligned_box;
/// use glam::Vec3;
///
/// let cluster = PointCluster::from_points(vec![
///     Vec3::new(2.0, 0.0, 0.0),
///     Vec3::new(3.0, 1.0, 0.5),
/// ]).unwrap();
///
/// let bbox = bearing_aligned_box(&cluster);
/// assert!(bbox.has_finite_size());
/// ```
#[must_use]
pub fn bearing_aligned_box(cluster: &PointCluster) -> OrientedBox3d {
    let c = cluster.centroid();
    let theta = -c.y.atan2(c.x.mul_add(c.x, c.z * c.z).sqrt());
    let rotation = Quat::from_rotation_z(theta);

    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for point in cluster.points() {
        let rotated = rotation * *point;
        min = min.min(rotated);
        max = max.max(rotated);
    }

    let inverse = rotation.inverse();
    let center = inverse * ((min + max) / 2.0);
    let size = max - min;

    OrientedBox3d::new(
        center.to_array(),
        [inverse.w, inverse.x, inverse.y, inverse.z],
        size.to_array(),
    )
}
