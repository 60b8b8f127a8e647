//! Frame-level containers and cross-frame correspondence types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::point::{LidarPoint, PixelPoint};
use super::region::DetectionRegion;

/// A keypoint correspondence between two consecutive frames.
///
/// Indices refer to positions in the previous and current frames' keypoint
/// lists. Produced by an external feature matcher; read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypointMatch {
    /// Index into the previous frame's keypoint list
    pub prev_idx: usize,
    /// Index into the current frame's keypoint list
    pub curr_idx: usize,
}

impl KeypointMatch {
    /// Create a new match.
    #[inline]
    pub fn new(prev_idx: usize, curr_idx: usize) -> Self {
        Self { prev_idx, curr_idx }
    }
}

/// Mapping from previous-frame region ID to current-frame region ID.
///
/// Contains one entry per previous-frame region that collected at least one
/// correspondence vote. A missing key means "no current-frame counterpart
/// this step", never a zero/default ID.
pub type CorrespondenceMap = HashMap<u32, u32>;

/// All measurements for one time step.
///
/// Two consecutive frames (previous, current) are the unit of work for one
/// TTC computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorFrame {
    /// Detected keypoints, indexed by [`KeypointMatch`]
    pub keypoints: Vec<PixelPoint>,
    /// Detector output regions
    pub regions: Vec<DetectionRegion>,
    /// Raw LiDAR returns for this time step
    pub lidar_points: Vec<LidarPoint>,
}

impl SensorFrame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a region by its ID.
    pub fn region(&self, id: u32) -> Option<&DetectionRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Drop every region's associated points and matches.
    ///
    /// Association passes run on cleared regions so that re-processing a
    /// frame pair reproduces an identical assignment.
    pub fn clear_associations(&mut self) {
        for region in &mut self.regions {
            region.clear_associations();
        }
    }
}
