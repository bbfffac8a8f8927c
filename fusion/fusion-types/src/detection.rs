//! Detection types: 2D image-plane inputs and fused 3D outputs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{CoordinateFrame, Pose3d, Timestamp};

/// A 2D box in pixel coordinates, stored as center + size.
///
/// Membership is a closed-interval test on both axes.
///
/// # Example
///
/// ```
/// use fusion_types::PixelBox;
///
/// let bbox = PixelBox::new(320.0, 240.0, 100.0, 80.0);
/// assert!(bbox.contains(320.0, 240.0));
/// assert!(bbox.contains(270.0, 200.0)); // on the edge
/// assert!(!bbox.contains(269.9, 200.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelBox {
    /// Center x-coordinate in pixels.
    pub cx: f32,
    /// Center y-coordinate in pixels.
    pub cy: f32,
    /// Box width in pixels.
    pub size_x: f32,
    /// Box height in pixels.
    pub size_y: f32,
}

impl PixelBox {
    /// Creates a new pixel box from center and size.
    #[must_use]
    pub const fn new(cx: f32, cy: f32, size_x: f32, size_y: f32) -> Self {
        Self {
            cx,
            cy,
            size_x,
            size_y,
        }
    }

    /// Returns the left edge.
    #[must_use]
    pub fn min_x(&self) -> f32 {
        self.cx - self.size_x / 2.0
    }

    /// Returns the right edge.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.cx + self.size_x / 2.0
    }

    /// Returns the top edge.
    #[must_use]
    pub fn min_y(&self) -> f32 {
        self.cy - self.size_y / 2.0
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.cy + self.size_y / 2.0
    }

    /// Checks if a pixel coordinate falls inside the box (closed interval).
    #[must_use]
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u >= self.min_x() && u <= self.max_x() && v >= self.min_y() && v <= self.max_y()
    }
}

/// A classification hypothesis carried alongside a detection.
///
/// # Example
///
/// ```
/// use fusion_types::ObjectHypothesis;
///
/// let hyp = ObjectHypothesis::new(2, 0.93);
/// assert_eq!(hyp.class_id, 2);
/// assert!(hyp.pose.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectHypothesis {
    /// Class label index.
    pub class_id: u32,
    /// Confidence score in `[0, 1]`.
    pub score: f32,
    /// Optional pose prior supplied by the detector.
    pub pose: Option<Pose3d>,
}

impl ObjectHypothesis {
    /// Creates a hypothesis without a pose prior.
    #[must_use]
    pub const fn new(class_id: u32, score: f32) -> Self {
        Self {
            class_id,
            score,
            pose: None,
        }
    }

    /// Creates a hypothesis with a pose prior.
    #[must_use]
    pub const fn with_pose(class_id: u32, score: f32, pose: Pose3d) -> Self {
        Self {
            class_id,
            score,
            pose: Some(pose),
        }
    }
}

/// A single 2D detection: pixel box + classification hypotheses.
///
/// Input-only; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detection2d {
    /// Detected region in pixel space.
    pub bbox: PixelBox,
    /// Classification hypotheses for the region.
    pub hypotheses: Vec<ObjectHypothesis>,
}

impl Detection2d {
    /// Creates a new 2D detection.
    #[must_use]
    pub fn new(bbox: PixelBox, hypotheses: Vec<ObjectHypothesis>) -> Self {
        Self { bbox, hypotheses }
    }
}

/// A time-aligned batch of 2D detections.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detection2dArray {
    /// Timestamp of the source image.
    pub timestamp: Timestamp,
    /// Detections, in detector output order.
    pub detections: Vec<Detection2d>,
}

impl Detection2dArray {
    /// Creates a detection batch.
    #[must_use]
    pub fn new(timestamp: Timestamp, detections: Vec<Detection2d>) -> Self {
        Self {
            timestamp,
            detections,
        }
    }

    /// Returns the number of detections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    /// Checks if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

/// An oriented 3D bounding box.
///
/// Size components are non-negative by construction but may be non-finite
/// for degenerate source clusters; consumers must guard with
/// [`has_finite_size`](Self::has_finite_size).
///
/// # Example
///
/// ```
/// use fusion_types::OrientedBox3d;
///
/// let bbox = OrientedBox3d::new([1.0, 0.0, 0.0], [1.0, 0.0, 0.0, 0.0], [0.5, 0.5, 2.0]);
/// assert!(bbox.has_finite_size());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientedBox3d {
    /// Box center in meters: `[x, y, z]`.
    pub center: [f32; 3],
    /// Box orientation as unit quaternion: `[w, x, y, z]`.
    pub orientation: [f32; 4],
    /// Extent along each local axis in meters: `[x, y, z]`.
    pub size: [f32; 3],
}

impl OrientedBox3d {
    /// Creates an oriented box.
    #[must_use]
    pub const fn new(center: [f32; 3], orientation: [f32; 4], size: [f32; 3]) -> Self {
        Self {
            center,
            orientation,
            size,
        }
    }

    /// Returns the box pose (center + orientation).
    #[must_use]
    pub const fn pose(&self) -> Pose3d {
        Pose3d::new(self.center, self.orientation)
    }

    /// Checks that all three size components are finite.
    #[must_use]
    pub fn has_finite_size(&self) -> bool {
        self.size.iter().all(|s| s.is_finite())
    }
}

/// A fused 3D detection: oriented box + carried-over hypotheses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detection3d {
    /// Estimated oriented bounding box.
    pub bbox: OrientedBox3d,
    /// Hypotheses carried over from the source 2D detection.
    pub hypotheses: Vec<ObjectHypothesis>,
}

impl Detection3d {
    /// Creates a new 3D detection.
    #[must_use]
    pub fn new(bbox: OrientedBox3d, hypotheses: Vec<ObjectHypothesis>) -> Self {
        Self { bbox, hypotheses }
    }
}

/// A batch of fused 3D detections tagged with the input cloud's header.
///
/// Output order mirrors the input 2D detection order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Detection3dArray {
    /// Timestamp of the source cloud.
    pub timestamp: Timestamp,
    /// Frame of the source cloud.
    pub frame: CoordinateFrame,
    /// Fused detections.
    pub detections: Vec<Detection3d>,
}

impl Detection3dArray {
    /// Creates an empty batch with the given header.
    #[must_use]
    pub const fn new(timestamp: Timestamp, frame: CoordinateFrame) -> Self {
        Self {
            timestamp,
            frame,
            detections: Vec::new(),
        }
    }

    /// Returns the number of detections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.detections.len()
    }

    /// Checks if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Appends a detection.
    pub fn push(&mut self, detection: Detection3d) {
        self.detections.push(detection);
    }
}
