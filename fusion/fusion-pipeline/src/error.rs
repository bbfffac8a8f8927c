//! Error types for the fusion pipeline.
//!
//! Nothing here aborts an invocation. Transform failures degrade to an
//! empty cloud for the affected stage, and a detection without a
//! qualifying cluster is simply dropped (that case is not an error at all).

use thiserror::Error;

/// Errors that can occur in the fusion pipeline.
#[derive(Debug, Error)]
pub enum FusionError {
    /// A rigid transform lookup failed (unknown frame pair or a timestamp
    /// outside the provider's buffer horizon).
    #[error("transform unavailable: {source_frame} -> {target_frame} at {timestamp_secs}s")]
    TransformUnavailable {
        /// Requested target frame.
        target_frame: String,
        /// Requested source frame.
        source_frame: String,
        /// Requested lookup time in seconds.
        timestamp_secs: f64,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl FusionError {
    /// Creates a transform-unavailable error.
    #[must_use]
    pub fn transform_unavailable(
        target_frame: impl Into<String>,
        source_frame: impl Into<String>,
        timestamp_secs: f64,
    ) -> Self {
        Self::TransformUnavailable {
            target_frame: target_frame.into(),
            source_frame: source_frame.into(),
            timestamp_secs,
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}

/// Result type for fusion pipeline operations.
pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_transform_unavailable() {
        let err = FusionError::transform_unavailable("front_camera", "velodyne", 1.5);
        let msg = err.to_string();
        assert!(msg.contains("transform unavailable"));
        assert!(msg.contains("velodyne -> front_camera"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn error_invalid_config() {
        let err = FusionError::invalid_config("cluster tolerance must be positive");
        assert!(err.to_string().contains("invalid configuration"));
    }
}
