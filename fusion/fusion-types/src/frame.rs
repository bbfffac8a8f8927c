//! Coordinate frames and poses.
//!
//! Every cloud and camera model names the frame its data lives in, so the
//! pipeline can request the right rigid transform between them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference frame for sensor data.
///
/// # Example
///
/// ```
/// use fusion_types::CoordinateFrame;
///
/// let lidar = CoordinateFrame::sensor("velodyne");
/// assert_eq!(lidar.name(), "velodyne");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateFrame {
    /// Global world frame (inertial reference).
    World,
    /// Robot/vehicle body frame (moves with the platform).
    #[default]
    Body,
    /// Named sensor frame (e.g., `front_camera`, `velodyne`).
    Sensor(String),
}

impl CoordinateFrame {
    /// Creates a sensor-specific coordinate frame.
    #[must_use]
    pub fn sensor(name: impl Into<String>) -> Self {
        Self::Sensor(name.into())
    }

    /// Returns the name of the frame for display purposes.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::World => "world",
            Self::Body => "body",
            Self::Sensor(name) => name,
        }
    }
}

/// A 3D pose (position + orientation).
///
/// Position is in meters, orientation is a unit quaternion stored as
/// `[w, x, y, z]` with `w` the scalar part.
///
/// # Example
///
/// ```
/// use fusion_types::Pose3d;
///
/// let pose = Pose3d::identity();
/// assert_eq!(pose.position, [0.0, 0.0, 0.0]);
/// assert_eq!(pose.orientation, [1.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose3d {
    /// Position in meters: `[x, y, z]`.
    pub position: [f32; 3],
    /// Orientation as unit quaternion: `[w, x, y, z]`.
    pub orientation: [f32; 4],
}

impl Pose3d {
    /// Creates a new pose from position and orientation.
    #[must_use]
    pub const fn new(position: [f32; 3], orientation: [f32; 4]) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Creates the identity pose (at origin, no rotation).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            orientation: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Creates a pose with only translation (no rotation).
    #[must_use]
    pub const fn from_translation(position: [f32; 3]) -> Self {
        Self {
            position,
            orientation: [1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Returns the quaternion norm (should be ~1.0 for valid poses).
    #[must_use]
    pub fn quaternion_norm(&self) -> f32 {
        let [w, x, y, z] = self.orientation;
        w.mul_add(w, x.mul_add(x, y.mul_add(y, z * z))).sqrt()
    }

    /// Checks if the quaternion is approximately normalized.
    #[must_use]
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        (self.quaternion_norm() - 1.0).abs() < tolerance
    }
}

impl Default for Pose3d {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_frame_sensor() {
        let frame = CoordinateFrame::sensor("front_camera");
        assert_eq!(frame.name(), "front_camera");
    }

    #[test]
    fn coordinate_frame_names() {
        assert_eq!(CoordinateFrame::World.name(), "world");
        assert_eq!(CoordinateFrame::Body.name(), "body");
    }

    #[test]
    #[allow(clippy::float_cmp)] // Exact constant values from identity()
    fn pose_identity() {
        let pose = Pose3d::identity();
        assert_eq!(pose.position, [0.0, 0.0, 0.0]);
        assert_eq!(pose.orientation, [1.0, 0.0, 0.0, 0.0]);
        assert!(pose.is_normalized(1e-6));
    }

    #[test]
    fn pose_from_translation() {
        let pose = Pose3d::from_translation([1.0, 2.0, 3.0]);
        assert!((pose.position[2] - 3.0).abs() < 1e-6);
        assert!(pose.is_normalized(1e-6));
    }

    #[test]
    fn pose_unnormalized() {
        let pose = Pose3d::new([0.0, 0.0, 0.0], [2.0, 0.0, 0.0, 0.0]);
        assert!(!pose.is_normalized(1e-6));
        assert!((pose.quaternion_norm() - 2.0).abs() < 1e-6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frame_serialization() {
        let frame = CoordinateFrame::sensor("test");
        let json = serde_json::to_string(&frame).ok();
        assert!(json.is_some());
    }
}
