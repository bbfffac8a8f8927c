//! Visualization marker construction.

use fusion_types::{Detection3dArray, Marker, MarkerArray};

use crate::config::FusionConfig;

/// Marker namespace shared by all detection box markers.
pub const MARKER_NAMESPACE: &str = "detection";

/// Builds cube markers for a fused detection batch.
///
/// Marker ids are the detection's index in the batch, so a viewer replaces
/// markers in place across frames. Detections whose box has a non-finite
/// size component get no marker; the detection itself stays in the batch
/// for downstream consumers that can handle it.
///
/// # Example
///
/// ```
/// use fusion_pipeline::{FusionConfig, build_markers};
/// use fusion_types::{CoordinateFrame, Detection3dArray, Timestamp};
///
/// let detections = Detection3dArray::new(Timestamp::zero(), CoordinateFrame::sensor("velodyne"));
/// let markers = build_markers(&detections, &FusionConfig::default());
/// assert!(markers.markers.is_empty());
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn build_markers(detections: &Detection3dArray, config: &FusionConfig) -> MarkerArray {
    let markers = detections
        .detections
        .iter()
        .enumerate()
        .filter(|(_, det)| det.bbox.has_finite_size())
        .map(|(i, det)| Marker {
            ns: MARKER_NAMESPACE.to_string(),
            id: i as u32,
            pose: det.bbox.pose(),
            scale: det.bbox.size,
            color: config.marker_color,
            lifetime: config.marker_lifetime,
        })
        .collect();

    MarkerArray {
        timestamp: detections.timestamp,
        frame: detections.frame.clone(),
        markers,
    }
}
