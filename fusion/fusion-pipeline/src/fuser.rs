//! Detection fusion pipeline.

use fusion_types::{
    CameraModel, Detection2dArray, Detection3d, Detection3dArray, PointCloudFrame,
};
use glam::Vec3;
use tracing::{debug, warn};

use crate::config::FusionConfig;
use crate::error::Result;
use crate::frustum::frustum_filter;
use crate::obb::bearing_aligned_box;
use crate::provider::TransformProvider;
use crate::select::select_nearest_cluster;

/// Fuses 2D detections with a point cloud into 3D oriented boxes.
///
/// One invocation of [`process`](Self::process) handles one time-aligned
/// triple of camera model, cloud, and detection batch. The fuser holds no
/// state between invocations beyond its transform provider and config.
///
/// Detections that gather no 3D evidence are dropped, so the output batch
/// may be shorter than the input; the detections that do survive keep the
/// input's relative order. Transform failures degrade the whole invocation
/// to empty outputs with a warning rather than an error, matching how a
/// live system rides out transform buffer gaps.
pub struct DetectionFuser<P> {
    provider: P,
    config: FusionConfig,
}

impl<P: TransformProvider> DetectionFuser<P> {
    /// Creates a fuser from a transform provider and validated config.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::InvalidConfig`](crate::FusionError::InvalidConfig)
    /// if the clustering parameters are rejected.
    pub fn new(provider: P, config: FusionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Runs one fusion pass over a time-aligned input triple.
    ///
    /// Returns the fused 3D detections plus a debug cloud holding every
    /// point that contributed to a selected cluster, both tagged with the
    /// input cloud's timestamp and frame. A point inside several detection
    /// boxes appears in the debug cloud once per detection it supports.
    #[must_use]
    pub fn process(
        &self,
        camera: &CameraModel,
        cloud: &PointCloudFrame,
        detections: &Detection2dArray,
    ) -> (Detection3dArray, PointCloudFrame) {
        let mut fused = Detection3dArray::new(cloud.timestamp, cloud.frame.clone());
        let mut debug_cloud = PointCloudFrame::new(cloud.timestamp, cloud.frame.clone());

        let to_camera =
            match self
                .provider
                .lookup(&camera.frame, &cloud.frame, cloud.timestamp)
            {
                Ok(tf) => tf,
                Err(err) => {
                    warn!(error = %err, "skipping fusion pass");
                    return (fused, debug_cloud);
                }
            };
        let to_cloud = to_camera.inverse();

        let camera_points: Vec<[f32; 3]> = cloud
            .points
            .iter()
            .map(|p| to_camera.apply_point(Vec3::from_array(*p)).to_array())
            .collect();

        let params = self.config.cluster_params();
        for detection in &detections.detections {
            let subset = frustum_filter(&camera_points, &detection.bbox, camera);
            if subset.is_empty() {
                continue;
            }

            let subset: Vec<Vec3> = subset.iter().map(|p| to_cloud.apply_point(*p)).collect();
            let Some(cluster) = select_nearest_cluster(&subset, &params) else {
                continue;
            };

            let bbox = bearing_aligned_box(&cluster);
            for point in cluster.points() {
                debug_cloud.points.push(point.to_array());
            }
            fused.push(Detection3d::new(bbox, detection.hypotheses.clone()));
        }

        debug!(
            detections_in = detections.len(),
            detections_out = fused.len(),
            debug_points = debug_cloud.len(),
            "fusion pass complete"
        );
        (fused, debug_cloud)
    }
}
