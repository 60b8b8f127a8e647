//! Sensor processing layer.
//!
//! Converts raw sensor measurements into forms the association and
//! estimation algorithms consume.
//!
//! # Contents
//!
//! - [`calibration`]: Fixed projection triple mapping LiDAR space to pixels
//! - [`preprocessing`]: Point-cloud cleanup (density clustering)

pub mod calibration;
pub mod preprocessing;
