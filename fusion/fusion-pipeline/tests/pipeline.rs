//! End-to-end tests for the detection fusion pipeline.

#![allow(clippy::unwrap_used)]

use fusion_pipeline::{DetectionFuser, FusionConfig, RigidTransform, TransformTree, build_markers};
use fusion_types::{
    CameraIntrinsics, CameraModel, CoordinateFrame, Detection2d, Detection2dArray,
    ObjectHypothesis, PixelBox, PointCloudFrame, Timestamp,
};
use glam::Vec3;

fn camera_frame() -> CoordinateFrame {
    CoordinateFrame::sensor("front_camera")
}

fn lidar_frame() -> CoordinateFrame {
    CoordinateFrame::sensor("velodyne")
}

fn camera() -> CameraModel {
    CameraModel::new(CameraIntrinsics::ideal(500.0, 640, 480), camera_frame())
}

fn config() -> FusionConfig {
    FusionConfig {
        cluster_tolerance: 0.3,
        min_cluster_size: 5,
        max_cluster_size: 1000,
        ..FusionConfig::default()
    }
}

fn identity_tree() -> TransformTree {
    let mut tree = TransformTree::new();
    tree.set(&camera_frame(), &lidar_frame(), RigidTransform::identity());
    tree
}

/// Ten points strung along +Z from `origin`, spaced well inside the
/// cluster tolerance.
#[allow(clippy::cast_precision_loss)]
fn depth_blob(origin: [f32; 3]) -> Vec<[f32; 3]> {
    (0..10)
        .map(|i| [origin[0], origin[1], origin[2] + i as f32 * 0.05])
        .collect()
}

fn detection(bbox: PixelBox, class_id: u32) -> Detection2d {
    Detection2d::new(bbox, vec![ObjectHypothesis::new(class_id, 0.9)])
}

#[test]
fn empty_cloud_produces_empty_outputs() {
    let fuser = DetectionFuser::new(identity_tree(), config()).unwrap();
    let cloud = PointCloudFrame::new(Timestamp::from_secs_f64(1.0), lidar_frame());
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0)],
    );

    let (fused, debug_cloud) = fuser.process(&camera(), &cloud, &detections);
    assert!(fused.is_empty());
    assert!(debug_cloud.is_empty());
    assert_eq!(fused.timestamp, cloud.timestamp);
    assert_eq!(fused.frame, lidar_frame());

    let markers = build_markers(&fused, fuser.config());
    assert!(markers.is_empty());
}

#[test]
fn nearest_cluster_wins_over_background() {
    // Two blobs project onto the same pixels; the near one must be chosen.
    let mut points = depth_blob([0.0, 0.0, 2.0]);
    points.extend(depth_blob([0.0, 0.0, 8.0]));
    let cloud = PointCloudFrame::from_points(Timestamp::from_secs_f64(1.0), lidar_frame(), points);

    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 7)],
    );

    let fuser = DetectionFuser::new(identity_tree(), config()).unwrap();
    let (fused, debug_cloud) = fuser.process(&camera(), &cloud, &detections);

    assert_eq!(fused.len(), 1);
    let det = &fused.detections[0];
    assert_eq!(det.hypotheses, vec![ObjectHypothesis::new(7, 0.9)]);
    // Blob spans z in [2.0, 2.45], so the box centers near z = 2.225.
    assert!((det.bbox.center[2] - 2.225).abs() < 0.05);
    assert!(det.bbox.has_finite_size());

    // Only the selected cluster's points appear in the debug cloud.
    assert_eq!(debug_cloud.len(), 10);
    assert!(debug_cloud.points.iter().all(|p| p[2] < 3.0));
}

#[test]
fn detections_without_evidence_are_dropped_in_order() {
    let mut points = depth_blob([0.0, 0.0, 2.0]);
    points.extend(depth_blob([0.6, 0.0, 2.0]));
    let cloud = PointCloudFrame::from_points(Timestamp::from_secs_f64(1.0), lidar_frame(), points);

    // The middle box covers an empty patch of the image.
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![
            detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0),
            detection(PixelBox::new(100.0, 100.0, 30.0, 30.0), 1),
            detection(PixelBox::new(470.0, 240.0, 60.0, 60.0), 2),
        ],
    );

    let fuser = DetectionFuser::new(identity_tree(), config()).unwrap();
    let (fused, _) = fuser.process(&camera(), &cloud, &detections);

    let classes: Vec<u32> = fused
        .detections
        .iter()
        .map(|d| d.hypotheses[0].class_id)
        .collect();
    assert_eq!(classes, vec![0, 2]);
}

#[test]
fn undersized_frustum_cluster_drops_detection() {
    // Three points inside the box is below the minimum cluster size.
    let points = vec![[0.0, 0.0, 2.0], [0.0, 0.0, 2.05], [0.0, 0.0, 2.1]];
    let cloud = PointCloudFrame::from_points(Timestamp::from_secs_f64(1.0), lidar_frame(), points);
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0)],
    );

    let fuser = DetectionFuser::new(identity_tree(), config()).unwrap();
    let (fused, debug_cloud) = fuser.process(&camera(), &cloud, &detections);
    assert!(fused.is_empty());
    assert!(debug_cloud.is_empty());
}

#[test]
fn output_is_expressed_in_the_cloud_frame() {
    // Camera sits one meter behind the lidar along the optical axis, so a
    // lidar point at z maps to camera depth z + 1.
    let mut tree = TransformTree::new();
    tree.set(
        &camera_frame(),
        &lidar_frame(),
        RigidTransform::from_translation(Vec3::new(0.0, 0.0, 1.0)),
    );

    let cloud = PointCloudFrame::from_points(
        Timestamp::from_secs_f64(1.0),
        lidar_frame(),
        depth_blob([0.0, 0.0, 1.0]),
    );
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0)],
    );

    let fuser = DetectionFuser::new(tree, config()).unwrap();
    let (fused, debug_cloud) = fuser.process(&camera(), &cloud, &detections);

    assert_eq!(fused.len(), 1);
    // Blob spans z in [1.0, 1.45] in the lidar frame; a camera-frame result
    // would sit a full meter deeper.
    assert!((fused.detections[0].bbox.center[2] - 1.225).abs() < 0.05);
    assert_eq!(debug_cloud.frame, lidar_frame());
    assert!(debug_cloud.points.iter().all(|p| p[2] < 1.5));
}

#[test]
fn transform_failure_degrades_to_empty_outputs() {
    let cloud = PointCloudFrame::from_points(
        Timestamp::from_secs_f64(1.0),
        lidar_frame(),
        depth_blob([0.0, 0.0, 2.0]),
    );
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0)],
    );

    // No registered edge between the frames.
    let fuser = DetectionFuser::new(TransformTree::new(), config()).unwrap();
    let (fused, debug_cloud) = fuser.process(&camera(), &cloud, &detections);

    assert!(fused.is_empty());
    assert!(debug_cloud.is_empty());
    assert_eq!(fused.frame, lidar_frame());
}

#[test]
fn markers_follow_fused_detections() {
    let mut points = depth_blob([0.0, 0.0, 2.0]);
    points.extend(depth_blob([0.6, 0.0, 2.0]));
    let cloud = PointCloudFrame::from_points(Timestamp::from_secs_f64(1.0), lidar_frame(), points);
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![
            detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0),
            detection(PixelBox::new(470.0, 240.0, 60.0, 60.0), 1),
        ],
    );

    let fuser = DetectionFuser::new(identity_tree(), config()).unwrap();
    let (fused, _) = fuser.process(&camera(), &cloud, &detections);
    let markers = build_markers(&fused, fuser.config());

    assert_eq!(fused.len(), 2);
    assert_eq!(markers.len(), 2);
    assert_eq!(markers.frame, lidar_frame());
    assert_eq!(markers.markers[0].id, 0);
    assert_eq!(markers.markers[1].id, 1);
    for marker in &markers.markers {
        assert_eq!(marker.ns, "detection");
        assert!((marker.color.g - fuser.config().marker_color.g).abs() < 1e-6);
    }
}

#[test]
fn point_shared_by_two_boxes_counts_once_per_detection() {
    // Overlapping boxes both capture the same blob.
    let cloud = PointCloudFrame::from_points(
        Timestamp::from_secs_f64(1.0),
        lidar_frame(),
        depth_blob([0.0, 0.0, 2.0]),
    );
    let detections = Detection2dArray::new(
        cloud.timestamp,
        vec![
            detection(PixelBox::new(320.0, 240.0, 60.0, 60.0), 0),
            detection(PixelBox::new(325.0, 240.0, 60.0, 60.0), 1),
        ],
    );

    let fuser = DetectionFuser::new(identity_tree(), config()).unwrap();
    let (fused, debug_cloud) = fuser.process(&camera(), &cloud, &detections);

    assert_eq!(fused.len(), 2);
    assert_eq!(debug_cloud.len(), 20);
}
