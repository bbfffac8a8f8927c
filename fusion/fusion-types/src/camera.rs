//! Camera model types.
//!
//! The pipeline never touches pixels; it only needs the pinhole projection
//! terms and the frame the camera reports its data in.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::CoordinateFrame;

/// Camera intrinsic parameters (pinhole model).
///
/// Projects a 3D point `[X, Y, Z]` in the camera frame to pixel coordinates:
///
/// ```text
/// u = fx * X/Z + cx
/// v = fy * Y/Z + cy
/// ```
///
/// Distortion coefficients are carried as calibration data but not applied
/// during projection; frustum membership uses the ideal pinhole terms.
///
/// # Example
///
/// ```
/// use fusion_types::CameraIntrinsics;
///
/// let intr = CameraIntrinsics::ideal(500.0, 640, 480);
/// let pixel = intr.project([0.0, 0.0, 2.0]);
/// assert_eq!(pixel, Some([320.0, 240.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraIntrinsics {
    /// Focal length in pixels (x direction).
    pub fx: f32,
    /// Focal length in pixels (y direction).
    pub fy: f32,
    /// Principal point x-coordinate in pixels.
    pub cx: f32,
    /// Principal point y-coordinate in pixels.
    pub cy: f32,
    /// Distortion coefficients: `[k1, k2, p1, p2, k3]`.
    pub distortion: [f32; 5],
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl CameraIntrinsics {
    /// Creates new camera intrinsics with no distortion.
    #[must_use]
    pub const fn new(fx: f32, fy: f32, cx: f32, cy: f32, width: u32, height: u32) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            distortion: [0.0, 0.0, 0.0, 0.0, 0.0],
            width,
            height,
        }
    }

    /// Creates intrinsics for an ideal pinhole camera centered in the image.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ideal(focal_length: f32, width: u32, height: u32) -> Self {
        Self {
            fx: focal_length,
            fy: focal_length,
            cx: width as f32 / 2.0,
            cy: height as f32 / 2.0,
            distortion: [0.0, 0.0, 0.0, 0.0, 0.0],
            width,
            height,
        }
    }

    /// Projects a 3D point in the camera frame to pixel coordinates.
    ///
    /// Returns `None` if the point is behind the camera (`Z <= 0`).
    #[must_use]
    pub fn project(&self, point: [f32; 3]) -> Option<[f32; 2]> {
        let [x, y, z] = point;
        if z <= 0.0 {
            return None;
        }
        Some([self.fx * x / z + self.cx, self.fy * y / z + self.cy])
    }
}

impl Default for CameraIntrinsics {
    fn default() -> Self {
        Self::ideal(500.0, 640, 480)
    }
}

/// A camera model: intrinsics plus the frame the camera reports in.
///
/// Rebuilt fresh from each camera-info input; never cached across
/// invocations.
///
/// # Example
///
/// ```
/// use fusion_types::{CameraIntrinsics, CameraModel, CoordinateFrame};
///
/// let model = CameraModel::new(
///     CameraIntrinsics::ideal(500.0, 640, 480),
///     CoordinateFrame::sensor("front_camera"),
/// );
/// assert_eq!(model.frame_id(), "front_camera");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraModel {
    /// Intrinsic calibration.
    pub intrinsics: CameraIntrinsics,
    /// Frame the camera's data lives in.
    pub frame: CoordinateFrame,
}

impl CameraModel {
    /// Creates a camera model.
    #[must_use]
    pub const fn new(intrinsics: CameraIntrinsics, frame: CoordinateFrame) -> Self {
        Self { intrinsics, frame }
    }

    /// Returns the name of the camera's coordinate frame.
    #[must_use]
    pub fn frame_id(&self) -> &str {
        self.frame.name()
    }

    /// Projects a 3D point in the camera frame to pixel coordinates.
    ///
    /// Returns `None` if the point is behind the camera (`Z <= 0`).
    #[must_use]
    pub fn project(&self, point: [f32; 3]) -> Option<[f32; 2]> {
        self.intrinsics.project(point)
    }
}
