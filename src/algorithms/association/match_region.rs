//! Keypoint-match to detection-region assignment and outlier rejection.
//!
//! A match belongs to a region when its current-frame keypoint lies inside
//! the region's rectangle; under overlapping rectangles the first region
//! in list order wins, so a match never lands in two regions. Matches far
//! from the region's typical frame-to-frame displacement are then rejected
//! as mismatches.

use serde::{Deserialize, Serialize};

use crate::core::math;
use crate::core::types::{DetectionRegion, KeypointMatch, PixelPoint};

/// Configuration for match-to-region filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRegionConfig {
    /// Rejection threshold as a multiple of the region's mean
    /// frame-to-frame keypoint displacement.
    ///
    /// A match whose displacement is at least `distance_ratio × mean` is
    /// removed. Default: 1.5
    pub distance_ratio: f32,
}

impl Default for MatchRegionConfig {
    fn default() -> Self {
        Self { distance_ratio: 1.5 }
    }
}

/// Assigns keypoint matches to regions and rejects displacement outliers.
#[derive(Debug, Clone)]
pub struct MatchRegionFilter {
    config: MatchRegionConfig,
}

impl MatchRegionFilter {
    /// Create a new filter with the given configuration.
    pub fn new(config: MatchRegionConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &MatchRegionConfig {
        &self.config
    }

    /// Assign matches to current-frame regions, then filter each region.
    ///
    /// Appends to the regions' `matches`; callers wanting a fresh
    /// assignment clear the collections first.
    pub fn assign_and_filter(
        &self,
        regions: &mut [DetectionRegion],
        prev_keypoints: &[PixelPoint],
        curr_keypoints: &[PixelPoint],
        matches: &[KeypointMatch],
    ) {
        for m in matches {
            let keypoint = &curr_keypoints[m.curr_idx];
            if let Some(region) = regions.iter_mut().find(|r| r.rect.contains(keypoint)) {
                region.matches.push(*m);
            }
        }

        for region in regions.iter_mut() {
            self.reject_outliers(region, prev_keypoints, curr_keypoints);
        }
    }

    /// Remove matches whose displacement exceeds the mean-based threshold.
    ///
    /// A region with no matches short-circuits: there is no mean to
    /// threshold against, and no TTC contribution to protect.
    pub fn reject_outliers(
        &self,
        region: &mut DetectionRegion,
        prev_keypoints: &[PixelPoint],
        curr_keypoints: &[PixelPoint],
    ) {
        if region.matches.is_empty() {
            return;
        }

        let distances: Vec<f32> = region
            .matches
            .iter()
            .map(|m| prev_keypoints[m.prev_idx].distance(&curr_keypoints[m.curr_idx]))
            .collect();

        let Some(mean) = math::mean(&distances) else {
            return;
        };
        let threshold = self.config.distance_ratio * mean;

        // One pass into a fresh collection, swapped in atomically
        let retained: Vec<KeypointMatch> = region
            .matches
            .iter()
            .zip(&distances)
            .filter(|&(_, &distance)| distance < threshold)
            .map(|(m, _)| *m)
            .collect();
        region.matches = retained;
    }
}

impl Default for MatchRegionFilter {
    fn default() -> Self {
        Self::new(MatchRegionConfig::default())
    }
}
