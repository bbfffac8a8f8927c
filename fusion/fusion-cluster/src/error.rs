//! Error types for the fusion-cluster crate.

use thiserror::Error;

/// Errors that can occur when configuring cluster extraction.
///
/// Extraction itself never fails on valid parameters; an input that yields
/// no clusters is an empty result, not an error.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// Tolerance is not a positive, finite distance.
    #[error("invalid tolerance: {0} (must be finite and > 0)")]
    InvalidTolerance(f32),

    /// Size bounds are inconsistent.
    #[error("invalid size bounds: min {min} > max {max}")]
    InvalidSizeBounds {
        /// Minimum cluster size.
        min: usize,
        /// Maximum cluster size.
        max: usize,
    },
}

impl ClusterError {
    /// Creates an invalid tolerance error.
    #[must_use]
    pub const fn invalid_tolerance(tolerance: f32) -> Self {
        Self::InvalidTolerance(tolerance)
    }

    /// Creates an invalid size bounds error.
    #[must_use]
    pub const fn invalid_size_bounds(min: usize, max: usize) -> Self {
        Self::InvalidSizeBounds { min, max }
    }
}

/// Result type for cluster extraction.
pub type Result<T> = std::result::Result<T, ClusterError>;
