//! Camera-only TTC from relative keypoint-distance growth.
//!
//! As an object closes on the camera its image grows, and with it the
//! pixel distance between any two keypoints on the object. Under constant
//! closing velocity the per-frame distance ratio `d_curr / d_prev` relates
//! to TTC by `ttc = -dt / (1 - ratio)`. The estimator evaluates the ratio
//! over every keypoint pair and takes the median, which tolerates a
//! sizable fraction of mismatched or off-object pairs.

use serde::{Deserialize, Serialize};

use crate::core::math;
use crate::core::types::{KeypointMatch, PixelPoint};

/// Configuration for the camera TTC estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTtcConfig {
    /// Minimum current-frame pair separation in pixels.
    ///
    /// Ratios from nearly coincident keypoints are dominated by pixel
    /// quantization noise and are skipped. Default: 100.0
    pub min_pair_separation: f32,

    /// Previous-frame distances at or below this are skipped to avoid
    /// division by zero. Default: `f32::EPSILON`
    pub min_prev_distance: f32,
}

impl Default for CameraTtcConfig {
    fn default() -> Self {
        Self {
            min_pair_separation: 100.0,
            min_prev_distance: f32::EPSILON,
        }
    }
}

/// Median distance-ratio TTC estimator.
#[derive(Debug, Clone)]
pub struct CameraTtcEstimator {
    config: CameraTtcConfig,
}

impl CameraTtcEstimator {
    /// Create a new estimator with the given configuration.
    pub fn new(config: CameraTtcConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &CameraTtcConfig {
        &self.config
    }

    /// Estimate TTC in seconds from a region's filtered matches.
    ///
    /// Returns `None` when no keypoint pair survives the separation
    /// gates, and `Some(f32::INFINITY)` when the median ratio is exactly
    /// 1 (no perceived scale change, no collision predicted).
    pub fn estimate(
        &self,
        prev_keypoints: &[PixelPoint],
        curr_keypoints: &[PixelPoint],
        matches: &[KeypointMatch],
        frame_rate: f32,
    ) -> Option<f32> {
        let mut ratios = Vec::new();

        for (i, outer) in matches.iter().enumerate() {
            let outer_curr = &curr_keypoints[outer.curr_idx];
            let outer_prev = &prev_keypoints[outer.prev_idx];

            for inner in &matches[i + 1..] {
                let dist_curr = outer_curr.distance(&curr_keypoints[inner.curr_idx]);
                let dist_prev = outer_prev.distance(&prev_keypoints[inner.prev_idx]);

                if dist_prev <= self.config.min_prev_distance
                    || dist_curr < self.config.min_pair_separation
                {
                    continue;
                }

                ratios.push(dist_curr / dist_prev);
            }
        }

        let median_ratio = math::median(&mut ratios)?;
        if median_ratio == 1.0 {
            return Some(f32::INFINITY);
        }

        let dt = 1.0 / frame_rate;
        Some(-dt / (1.0 - median_ratio))
    }
}

impl Default for CameraTtcEstimator {
    fn default() -> Self {
        Self::new(CameraTtcConfig::default())
    }
}
