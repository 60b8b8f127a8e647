//! Range-only TTC from clustered closest in-lane distance.
//!
//! Each frame's point collection is cleaned by Euclidean clustering, then
//! restricted to the ego lane — the forward corridor directly ahead of
//! the platform — and reduced to its minimum forward distance. Under a
//! constant relative-velocity model the two minima give
//! `ttc = x_curr / ((x_prev - x_curr) / dt)`.

use serde::{Deserialize, Serialize};

use crate::core::types::LidarPoint;
use crate::sensors::preprocessing::{EuclideanClusterConfig, EuclideanClusterFilter};

/// Configuration for the LiDAR TTC estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LidarTtcConfig {
    /// Assumed ego-lane width in meters; only points within half of it
    /// either side of the centerline are measured. Default: 4.0
    pub lane_width: f32,

    /// Clustering applied to each frame's points before measurement.
    pub cluster: EuclideanClusterConfig,
}

impl Default for LidarTtcConfig {
    fn default() -> Self {
        Self {
            lane_width: 4.0,
            cluster: EuclideanClusterConfig::default(),
        }
    }
}

/// Closest in-lane distance TTC estimator.
#[derive(Debug, Clone)]
pub struct LidarTtcEstimator {
    config: LidarTtcConfig,
    filter: EuclideanClusterFilter,
}

impl LidarTtcEstimator {
    /// Create a new estimator with the given configuration.
    pub fn new(config: LidarTtcConfig) -> Self {
        let filter = EuclideanClusterFilter::new(config.cluster);
        Self { config, filter }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LidarTtcConfig {
        &self.config
    }

    /// Estimate TTC in seconds from a region's point collections.
    ///
    /// Returns `None` when either frame has no in-lane point left after
    /// clustering — "no valid range data", never a distance of zero — and
    /// `Some(f32::INFINITY)` when the two minima coincide (no closing
    /// motion observed). A receding target yields a negative value, which
    /// is passed through for the caller to interpret.
    pub fn estimate(
        &self,
        prev_points: &[LidarPoint],
        curr_points: &[LidarPoint],
        frame_rate: f32,
    ) -> Option<f32> {
        let min_x_prev = self.closest_in_lane(&self.filter.apply(prev_points))?;
        let min_x_curr = self.closest_in_lane(&self.filter.apply(curr_points))?;

        let closing = min_x_prev - min_x_curr;
        if closing == 0.0 {
            return Some(f32::INFINITY);
        }

        Some(min_x_curr / (closing * frame_rate))
    }

    /// Minimum forward distance among in-lane points, if any.
    fn closest_in_lane(&self, points: &[LidarPoint]) -> Option<f32> {
        let half_lane = self.config.lane_width / 2.0;
        points
            .iter()
            .filter(|p| p.y.abs() < half_lane)
            .map(|p| p.x)
            .reduce(f32::min)
    }
}

impl Default for LidarTtcEstimator {
    fn default() -> Self {
        Self::new(LidarTtcConfig::default())
    }
}
