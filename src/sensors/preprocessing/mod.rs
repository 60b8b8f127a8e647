//! Point-cloud preprocessing.
//!
//! Cleanup applied to a region's LiDAR points before distance measurement.

mod euclidean_cluster;

pub use euclidean_cluster::{EuclideanClusterConfig, EuclideanClusterFilter};
