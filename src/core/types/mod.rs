//! Core data types for camera/LiDAR fusion.
//!
//! Geometry types:
//! - [`LidarPoint`]: 3D LiDAR return in the sensor frame
//! - [`PixelPoint`]: 2D image-plane location (also the keypoint type)
//! - [`Rect2D`]: Axis-aligned image-plane rectangle
//!
//! Association types:
//! - [`KeypointMatch`]: Cross-frame keypoint correspondence by index
//! - [`DetectionRegion`]: Detector output with its associated points/matches
//! - [`SensorFrame`]: All measurements for one time step
//! - [`CorrespondenceMap`]: Previous-frame → current-frame region ID mapping

mod frame;
mod point;
mod region;

pub use frame::{CorrespondenceMap, KeypointMatch, SensorFrame};
pub use point::{LidarPoint, PixelPoint};
pub use region::{DetectionRegion, Rect2D};
