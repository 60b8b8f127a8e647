//! Sensor rig calibration and LiDAR-to-image projection.
//!
//! The rig is described by three fixed matrices supplied once per session:
//! the camera projection (intrinsics folded with rectification), the
//! rectifying rotation, and the LiDAR-to-camera rigid transform. None of
//! them are derived here.

use nalgebra::{Matrix3x4, Matrix4, Vector4};
use serde::{Deserialize, Serialize};

use crate::core::types::{LidarPoint, PixelPoint};

/// Fixed projection triple for one sensor rig.
///
/// Maps a 3D LiDAR point into image-plane pixel coordinates through the
/// homogeneous chain `projection · rect_rotation · lidar_to_camera`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorCalibration {
    /// Intrinsic + rectification projection (3×4)
    pub projection: Matrix3x4<f32>,
    /// Rectifying rotation, homogeneous (4×4)
    pub rect_rotation: Matrix4<f32>,
    /// LiDAR-to-camera rigid transform, homogeneous (4×4)
    pub lidar_to_camera: Matrix4<f32>,
}

impl SensorCalibration {
    /// Create a calibration from its three matrices.
    pub fn new(
        projection: Matrix3x4<f32>,
        rect_rotation: Matrix4<f32>,
        lidar_to_camera: Matrix4<f32>,
    ) -> Self {
        Self {
            projection,
            rect_rotation,
            lidar_to_camera,
        }
    }

    /// Project a LiDAR point into image-plane pixel coordinates.
    ///
    /// The perspective divide uses the homogeneous depth component
    /// (index 2) of the projected vector. A point at zero camera depth
    /// yields non-finite pixels; such pixels fall outside every detection
    /// rectangle and are excluded by the membership tests downstream.
    pub fn project(&self, point: &LidarPoint) -> PixelPoint {
        let homogeneous = Vector4::new(point.x, point.y, point.z, 1.0);
        let image = self.projection * self.rect_rotation * self.lidar_to_camera * homogeneous;
        PixelPoint::new(image[0] / image[2], image[1] / image[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Pinhole projection with the usual automotive axis swap:
    /// camera X = -lidar Y, camera Y = -lidar Z, camera Z = lidar X.
    fn test_calibration() -> SensorCalibration {
        let projection = Matrix3x4::new(
            1000.0, 0.0, 600.0, 0.0, //
            0.0, 1000.0, 300.0, 0.0, //
            0.0, 0.0, 1.0, 0.0,
        );
        let lidar_to_camera = Matrix4::new(
            0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );
        SensorCalibration::new(projection, Matrix4::identity(), lidar_to_camera)
    }

    #[test]
    fn test_forward_point_projects_to_principal_point() {
        let calib = test_calibration();
        let pixel = calib.project(&LidarPoint::new(10.0, 0.0, 0.0));
        assert_relative_eq!(pixel.x, 600.0, epsilon = 1e-3);
        assert_relative_eq!(pixel.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_left_offset_moves_pixel_left() {
        let calib = test_calibration();
        // 2m to the left at 10m forward: camera x = -2, so u = 600 - 200
        let pixel = calib.project(&LidarPoint::new(10.0, 2.0, 0.0));
        assert_relative_eq!(pixel.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(pixel.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_height_moves_pixel_up() {
        let calib = test_calibration();
        // 1m up at 10m forward: camera y = -1, so v = 300 - 100
        let pixel = calib.project(&LidarPoint::new(10.0, 0.0, 1.0));
        assert_relative_eq!(pixel.y, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_projection_scales_with_depth() {
        let calib = test_calibration();
        let near = calib.project(&LidarPoint::new(5.0, 1.0, 0.0));
        let far = calib.project(&LidarPoint::new(20.0, 1.0, 0.0));
        // Same lateral offset shrinks in the image as depth grows
        assert!((600.0 - far.x) < (600.0 - near.x));
    }

    #[test]
    fn test_zero_depth_yields_non_finite_pixel() {
        let calib = test_calibration();
        let pixel = calib.project(&LidarPoint::new(0.0, 0.0, 0.0));
        assert!(!pixel.x.is_finite() || !pixel.y.is_finite());
    }
}
