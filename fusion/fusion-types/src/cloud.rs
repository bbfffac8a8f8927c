//! Point cloud types.
//!
//! A cloud is an ordered sequence of 3D points tagged with the frame it
//! lives in and the capture timestamp. Transform stages never mutate a
//! cloud in place; they produce a new instance in the target frame.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CoordinateFrame, Timestamp};

/// A point cloud bound to a coordinate frame and timestamp.
///
/// # Example
///
/// ```
/// use fusion_types::{CoordinateFrame, PointCloudFrame, Timestamp};
///
/// let cloud = PointCloudFrame::from_points(
///     Timestamp::from_secs_f64(1.0),
///     CoordinateFrame::sensor("velodyne"),
///     vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
/// );
/// assert_eq!(cloud.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloudFrame {
    /// Timestamp of the capture.
    pub timestamp: Timestamp,
    /// Coordinate frame of the points.
    pub frame: CoordinateFrame,
    /// Point positions in meters: `[x, y, z]`.
    pub points: Vec<[f32; 3]>,
}

impl PointCloudFrame {
    /// Creates an empty cloud.
    #[must_use]
    pub const fn new(timestamp: Timestamp, frame: CoordinateFrame) -> Self {
        Self {
            timestamp,
            frame,
            points: Vec::new(),
        }
    }

    /// Creates a cloud from a vector of positions.
    #[must_use]
    pub fn from_points(
        timestamp: Timestamp,
        frame: CoordinateFrame,
        points: Vec<[f32; 3]>,
    ) -> Self {
        Self {
            timestamp,
            frame,
            points,
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends points from a slice, keeping this cloud's header.
    pub fn extend_from_slice(&mut self, points: &[[f32; 3]]) {
        self.points.extend_from_slice(points);
    }
}
