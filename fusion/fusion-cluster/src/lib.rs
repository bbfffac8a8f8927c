//! Grid-accelerated Euclidean clustering for point clouds.
//!
//! Partitions a point set into clusters by region growing: two points
//! belong to the same cluster when they are connected by a chain of
//! neighbors, each within a distance tolerance. Clusters outside the
//! configured size bounds are discarded.
//!
//! The neighbor search runs over a hash-grid of cells with edge length
//! equal to the tolerance, so each point only tests candidates from its
//! 27-cell neighborhood instead of the whole set.
//!
//! # Example
//!
//! ```
//! use fusion_cluster::{ClusterParams, extract_clusters};
//! use glam::Vec3;
//!
//! let points = vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(0.2, 0.0, 0.0),
//!     Vec3::new(8.0, 0.0, 0.0),
//! ];
//!
//! let params = ClusterParams::new(0.5, 2, 1000);
//! let clusters = extract_clusters(&points, &params).unwrap();
//!
//! // The lone distant point fails the minimum size bound.
//! assert_eq!(clusters.len(), 1);
//! assert_eq!(clusters[0].len(), 2);
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

mod cell;
mod error;
mod extract;

pub use cell::CellCoord;
pub use error::{ClusterError, Result};
pub use extract::{ClusterParams, PointCluster, extract_clusters};
