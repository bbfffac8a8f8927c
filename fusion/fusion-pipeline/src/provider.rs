//! Transform provider boundary.
//!
//! The pipeline never asks a transport for transforms directly; it goes
//! through [`TransformProvider`], which reports failure as an explicit
//! result value so the caller can degrade gracefully instead of unwinding.

use std::collections::HashMap;

use fusion_types::{CoordinateFrame, TimeRange, Timestamp};

use crate::error::{FusionError, Result};
use crate::transform::RigidTransform;

/// Source of rigid transforms between named frames at a point in time.
pub trait TransformProvider {
    /// Looks up the transform that maps points from `source` into `target`
    /// at the given time.
    ///
    /// # Errors
    ///
    /// Returns [`FusionError::TransformUnavailable`] if the frame pair is
    /// unknown or the timestamp is outside the provider's buffer horizon.
    fn lookup(
        &self,
        target: &CoordinateFrame,
        source: &CoordinateFrame,
        time: Timestamp,
    ) -> Result<RigidTransform>;
}

/// An in-memory transform provider backed by registered frame edges.
///
/// Registering an edge makes both directions resolvable: the reverse
/// lookup returns the inverse transform. Same-frame lookups resolve to
/// identity. An optional horizon bounds the timestamps lookups accept,
/// mimicking a live transform buffer's limited history.
///
/// # Example
///
/// ```
/// use fusion_pipeline::{RigidTransform, TransformProvider, TransformTree};
/// use fusion_types::{CoordinateFrame, Timestamp};
/// use glam::Vec3;
///
/// let cam = CoordinateFrame::sensor("front_camera");
/// let lidar = CoordinateFrame::sensor("velodyne");
///
/// let mut tree = TransformTree::new();
/// tree.set(&cam, &lidar, RigidTransform::from_translation(Vec3::X));
///
/// let tf = tree.lookup(&cam, &lidar, Timestamp::zero()).unwrap();
/// assert!((tf.translation.x - 1.0).abs() < 1e-6);
///
/// // Reverse direction resolves to the inverse.
/// let back = tree.lookup(&lidar, &cam, Timestamp::zero()).unwrap();
/// assert!((back.translation.x + 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformTree {
    edges: HashMap<(String, String), RigidTransform>,
    horizon: Option<TimeRange>,
}

impl TransformTree {
    /// Creates an empty tree with no horizon (all timestamps accepted).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tree that only accepts lookups inside `horizon`.
    #[must_use]
    pub fn with_horizon(horizon: TimeRange) -> Self {
        Self {
            edges: HashMap::new(),
            horizon: Some(horizon),
        }
    }

    /// Registers (or replaces) the transform mapping `source` into `target`.
    pub fn set(
        &mut self,
        target: &CoordinateFrame,
        source: &CoordinateFrame,
        transform: RigidTransform,
    ) {
        self.edges.insert(
            (target.name().to_string(), source.name().to_string()),
            transform,
        );
    }

    /// Returns the number of registered edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Checks if no edges are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl TransformProvider for TransformTree {
    fn lookup(
        &self,
        target: &CoordinateFrame,
        source: &CoordinateFrame,
        time: Timestamp,
    ) -> Result<RigidTransform> {
        if let Some(horizon) = self.horizon {
            if !horizon.contains(time) {
                return Err(FusionError::transform_unavailable(
                    target.name(),
                    source.name(),
                    time.as_secs_f64(),
                ));
            }
        }

        if target == source {
            return Ok(RigidTransform::identity());
        }

        let key = (target.name().to_string(), source.name().to_string());
        if let Some(tf) = self.edges.get(&key) {
            return Ok(*tf);
        }

        let reverse = (key.1, key.0);
        if let Some(tf) = self.edges.get(&reverse) {
            return Ok(tf.inverse());
        }

        Err(FusionError::transform_unavailable(
            target.name(),
            source.name(),
            time.as_secs_f64(),
        ))
    }
}
