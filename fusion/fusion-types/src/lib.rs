//! Shared data types for lidar/camera detection fusion.
//!
//! This crate provides the foundational types exchanged between the fusion
//! pipeline and its collaborators:
//!
//! - [`CameraModel`] / [`CameraIntrinsics`] - Pinhole camera with a frame id
//! - [`PointCloudFrame`] - A point cloud bound to a frame and timestamp
//! - [`Detection2d`] / [`Detection2dArray`] - Image-plane detector output
//! - [`Detection3d`] / [`Detection3dArray`] - Fused oriented-box output
//! - [`Marker`] / [`MarkerArray`] - Display-only cube primitives
//! - [`CoordinateFrame`] / [`Pose3d`] - Frames and poses
//! - [`Timestamp`] / [`Duration`] / [`TimeRange`] - Nanosecond timing
//!
//! # Layer 0 Crate
//!
//! Zero heavy dependencies: plain-array fields, serde behind an optional
//! `serde` feature. Usable from drivers, offline tools, and tests alike.
//!
//! # Lifecycle
//!
//! All message types are created and consumed within a single pipeline
//! invocation. Transform stages produce new [`PointCloudFrame`] instances
//! rather than mutating in place, and the camera model is rebuilt fresh
//! from each camera-info input.
//!
//! # Example
//!
//! ```
//! use fusion_types::{CoordinateFrame, PointCloudFrame, Timestamp};
//!
//! let cloud = PointCloudFrame::from_points(
//!     Timestamp::from_secs_f64(1.0),
//!     CoordinateFrame::sensor("velodyne"),
//!     vec![[1.0, 0.0, 0.0]],
//! );
//! assert_eq!(cloud.len(), 1);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod camera;
mod cloud;
mod detection;
mod frame;
mod marker;
mod time;

pub use camera::{CameraIntrinsics, CameraModel};
pub use cloud::PointCloudFrame;
pub use detection::{
    Detection2d, Detection2dArray, Detection3d, Detection3dArray, ObjectHypothesis, OrientedBox3d,
    PixelBox,
};
pub use frame::{CoordinateFrame, Pose3d};
pub use marker::{Marker, MarkerArray, Rgba};
pub use time::{Duration, TimeRange, Timestamp};
