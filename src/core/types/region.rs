//! Detection regions and image-plane rectangles.

use serde::{Deserialize, Serialize};

use super::frame::KeypointMatch;
use super::point::{LidarPoint, PixelPoint};

/// Axis-aligned image-plane rectangle in pixel coordinates.
///
/// Containment is half-open: `x <= px < x + width` (same for Y), applied
/// consistently by every membership test in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2D {
    /// Left edge in pixels
    pub x: f32,
    /// Top edge in pixels
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect2D {
    /// Create a new rectangle from its top-left corner and extent.
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment test.
    #[inline]
    pub fn contains(&self, point: &PixelPoint) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }

    /// Rectangle inset toward its center by `factor`.
    ///
    /// Each side is inset by `factor / 2` of that side's extent, so width
    /// and height scale to `1 - factor`. A factor of 0 returns the
    /// rectangle unchanged; factors approaching 1 collapse it onto its
    /// center. Detector rectangles are typically over-inclusive at the
    /// edges, so membership tests run against the shrunk rectangle.
    #[inline]
    pub fn shrunk(&self, factor: f32) -> Rect2D {
        Rect2D {
            x: self.x + factor * self.width / 2.0,
            y: self.y + factor * self.height / 2.0,
            width: self.width * (1.0 - factor),
            height: self.height * (1.0 - factor),
        }
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> PixelPoint {
        PixelPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One detector output rectangle plus the measurements associated to it.
///
/// Created once per frame by an external object detector; the point and
/// match collections start empty and are populated by the association
/// algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRegion {
    /// Region identifier, unique within its frame
    pub id: u32,
    /// Detector rectangle in pixel coordinates
    pub rect: Rect2D,
    /// LiDAR points assigned to this region
    pub lidar_points: Vec<LidarPoint>,
    /// Keypoint matches assigned to this region
    pub matches: Vec<KeypointMatch>,
}

impl DetectionRegion {
    /// Create a region with empty association collections.
    pub fn new(id: u32, rect: Rect2D) -> Self {
        Self {
            id,
            rect,
            lidar_points: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Drop all associated points and matches.
    pub fn clear_associations(&mut self) {
        self.lidar_points.clear();
        self.matches.clear();
    }
}
