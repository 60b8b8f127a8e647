//! Per-region TTC estimators.
//!
//! Two independent estimators under a constant relative-velocity model:
//!
//! - [`camera_ttc`]: Relative growth of pairwise keypoint distances
//! - [`lidar_ttc`]: Clustered closest in-lane range distance
//!
//! Both return `None` when the input carries no usable data and
//! `Some(f32::INFINITY)` when the geometry shows no closing rate.

mod camera_ttc;
mod lidar_ttc;

pub use camera_ttc::{CameraTtcConfig, CameraTtcEstimator};
pub use lidar_ttc::{LidarTtcConfig, LidarTtcEstimator};
