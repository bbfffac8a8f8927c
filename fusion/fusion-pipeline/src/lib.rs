//! Camera/lidar detection fusion.
//!
//! Lifts 2D object detections into 3D oriented bounding boxes using a
//! point cloud and a camera model. One pass over a time-aligned input
//! triple runs, per detection:
//!
//! 1. **Frustum filter** — project the cloud through the camera and keep
//!    the points whose pixels land inside the detection box.
//! 2. **Cluster and select** — Euclidean-cluster the surviving points and
//!    keep the cluster nearest the sensor; background clutter behind the
//!    object loses here.
//! 3. **Box fit** — fit a bearing-aligned oriented box around the chosen
//!    cluster.
//!
//! Detections with no qualifying cluster are dropped; survivors keep their
//! input order and carry their 2D classification hypotheses unchanged.
//! Transform lookup failures degrade a pass to empty outputs with a
//! warning rather than an error.
//!
//! # Example
//!
//! ```
//! use fusion_pipeline::{DetectionFuser, FusionConfig, RigidTransform, TransformTree};
//! use fusion_types::{
//!     CameraIntrinsics, CameraModel, CoordinateFrame, Detection2dArray, PointCloudFrame,
//!     Timestamp,
//! };
//!
//! let camera_frame = CoordinateFrame::sensor("front_camera");
//! let lidar_frame = CoordinateFrame::sensor("velodyne");
//!
//! let mut tree = TransformTree::new();
//! tree.set(&camera_frame, &lidar_frame, RigidTransform::identity());
//!
//! let fuser = DetectionFuser::new(tree, FusionConfig::default()).unwrap();
//!
//! let camera = CameraModel::new(CameraIntrinsics::ideal(500.0, 640, 480), camera_frame);
//! let cloud = PointCloudFrame::new(Timestamp::zero(), lidar_frame);
//! let detections = Detection2dArray::default();
//!
//! let (fused, debug_cloud) = fuser.process(&camera, &cloud, &detections);
//! assert!(fused.is_empty());
//! assert!(debug_cloud.is_empty());
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod frustum;
mod fuser;
mod markers;
mod obb;
mod provider;
mod select;
mod transform;

pub use config::FusionConfig;
pub use error::{FusionError, Result};
pub use frustum::frustum_filter;
pub use fuser::DetectionFuser;
pub use markers::{MARKER_NAMESPACE, build_markers};
pub use obb::bearing_aligned_box;
pub use provider::{TransformProvider, TransformTree};
pub use select::select_nearest_cluster;
pub use transform::RigidTransform;
