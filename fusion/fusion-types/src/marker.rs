//! Visualization marker types.
//!
//! Markers are display-only cubes derived 1:1 from finite-size 3D boxes.
//! They carry everything a rendering sink needs: pose, scale, color, and a
//! short display lifetime.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CoordinateFrame, Duration, Pose3d, Timestamp};

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha (opacity) component.
    pub a: f32,
}

impl Rgba {
    /// Creates a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// A renderable cube primitive for one 3D detection.
///
/// # Example
///
/// ```
/// use fusion_types::{Duration, Marker, Pose3d, Rgba};
///
/// let marker = Marker {
///     ns: "detection".to_string(),
///     id: 0,
///     pose: Pose3d::identity(),
///     scale: [1.0, 1.0, 1.0],
///     color: Rgba::new(0.0, 1.0, 0.0, 0.5),
///     lifetime: Duration::from_millis(500),
/// };
/// assert_eq!(marker.ns, "detection");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Marker {
    /// Namespace grouping related markers.
    pub ns: String,
    /// Id unique within the namespace.
    pub id: u32,
    /// Cube pose (box center + orientation).
    pub pose: Pose3d,
    /// Cube edge lengths in meters: `[x, y, z]`.
    pub scale: [f32; 3],
    /// Fill color.
    pub color: Rgba,
    /// How long the sink should keep displaying the marker.
    pub lifetime: Duration,
}

/// A batch of markers tagged with the source cloud's header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerArray {
    /// Timestamp of the source cloud.
    pub timestamp: Timestamp,
    /// Frame the marker poses live in.
    pub frame: CoordinateFrame,
    /// Markers to display.
    pub markers: Vec<Marker>,
}

impl MarkerArray {
    /// Creates an empty marker batch with the given header.
    #[must_use]
    pub const fn new(timestamp: Timestamp, frame: CoordinateFrame) -> Self {
        Self {
            timestamp,
            frame,
            markers: Vec::new(),
        }
    }

    /// Returns the number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Checks if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_array_empty() {
        let array = MarkerArray::new(Timestamp::zero(), CoordinateFrame::Body);
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
    }

    #[test]
    fn rgba_components() {
        let color = Rgba::new(0.0, 1.0, 0.0, 0.5);
        assert!((color.g - 1.0).abs() < 1e-6);
        assert!((color.a - 0.5).abs() < 1e-6);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn marker_serialization() {
        let marker = Marker {
            ns: "detection".to_string(),
            id: 3,
            pose: Pose3d::identity(),
            scale: [1.0, 2.0, 3.0],
            color: Rgba::new(0.0, 1.0, 0.0, 0.5),
            lifetime: Duration::from_millis(500),
        };
        let json = serde_json::to_string(&marker);
        assert!(json.is_ok());
    }
}
