//! Frustum membership filtering.

use fusion_types::{CameraModel, PixelBox};
use glam::Vec3;

/// Selects the camera-frame points whose projections fall inside a 2D
/// detection box.
///
/// A point survives when all of:
/// - it has positive depth (`z > 0`; projection refuses the rest),
/// - its projected `u` is positive (rejects the principal-axis
///   singularity and points projecting off the left of the sensor),
/// - `(u, v)` lies inside the closed pixel box.
///
/// An empty result is a valid outcome meaning "no 3D evidence for this
/// detection".
///
/// # Example
///
/// ```
/// use fusion_pipeline::frustum_filter;
/// use fusion_types::{CameraIntrinsics, CameraModel, CoordinateFrame, PixelBox};
/// use glam::Vec3;
///
/// let camera = CameraModel::new(
///     CameraIntrinsics::ideal(500.0, 640, 480),
///     CoordinateFrame::sensor("front_camera"),
/// );
/// let bbox = PixelBox::new(320.0, 240.0, 100.0, 100.0);
///
/// let points = [[0.0, 0.0, 2.0], [0.0, 0.0, -2.0]];
/// let subset = frustum_filter(&points, &bbox, &camera);
/// assert_eq!(subset, vec![Vec3::new(0.0, 0.0, 2.0)]);
/// ```
#[must_use]
pub fn frustum_filter(points: &[[f32; 3]], bbox: &PixelBox, camera: &CameraModel) -> Vec<Vec3> {
    points
        .iter()
        .filter_map(|point| {
            let [u, v] = camera.project(*point)?;
            (u > 0.0 && bbox.contains(u, v)).then(|| Vec3::from_array(*point))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_types::{CameraIntrinsics, CoordinateFrame};

    fn camera() -> CameraModel {
        CameraModel::new(
            CameraIntrinsics::ideal(500.0, 640, 480),
            CoordinateFrame::sensor("front_camera"),
        )
    }

    #[test]
    fn keeps_point_inside_box() {
        let bbox = PixelBox::new(320.0, 240.0, 100.0, 100.0);
        let subset = frustum_filter(&[[0.0, 0.0, 2.0]], &bbox, &camera());
        assert_eq!(subset.len(), 1);
    }

    #[test]
    fn excludes_nonpositive_depth_regardless_of_projection() {
        let bbox = PixelBox::new(320.0, 240.0, 1000.0, 1000.0);
        let points = [[0.0, 0.0, -2.0], [0.1, 0.1, 0.0]];
        assert!(frustum_filter(&points, &bbox, &camera()).is_empty());
    }

    #[test]
    fn excludes_projection_outside_box() {
        let bbox = PixelBox::new(320.0, 240.0, 50.0, 50.0);
        // Projects to u = 500 * 1 / 2 + 320 = 570, well right of the box.
        let subset = frustum_filter(&[[1.0, 0.0, 2.0]], &bbox, &camera());
        assert!(subset.is_empty());
    }

    #[test]
    fn box_edges_are_inclusive() {
        // u = 500 * x / 2 + 320 = 345 at x = 0.1; box right edge at 345.
        let bbox = PixelBox::new(320.0, 240.0, 50.0, 50.0);
        let subset = frustum_filter(&[[0.1, 0.0, 2.0]], &bbox, &camera());
        assert_eq!(subset.len(), 1);
    }

    #[test]
    fn excludes_nonpositive_u() {
        // u = 500 * (-2) / 2 + 320 = -180: inside a huge box but u <= 0.
        let bbox = PixelBox::new(0.0, 240.0, 10_000.0, 10_000.0);
        let subset = frustum_filter(&[[-2.0, 0.0, 2.0]], &bbox, &camera());
        assert!(subset.is_empty());
    }

    #[test]
    fn empty_cloud_yields_empty_subset() {
        let bbox = PixelBox::new(320.0, 240.0, 100.0, 100.0);
        assert!(frustum_filter(&[], &bbox, &camera()).is_empty());
    }
}
