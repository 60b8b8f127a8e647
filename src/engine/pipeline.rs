//! Frame-pair TTC pipeline.
//!
//! Drives one full association + estimation pass over a pair of
//! consecutive frames: LiDAR points into regions, keypoint matches into
//! regions, regions across frames, then the two TTC estimators per linked
//! region pair. Input is validated once at this boundary; the algorithms
//! below assume index-consistent data.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithms::association::{
    MatchRegionConfig, MatchRegionFilter, PointRegionAssociator, PointRegionConfig, track_regions,
};
use crate::algorithms::estimation::{
    CameraTtcConfig, CameraTtcEstimator, LidarTtcConfig, LidarTtcEstimator,
};
use crate::core::types::{CorrespondenceMap, KeypointMatch, SensorFrame};
use crate::error::ValidationError;
use crate::sensors::calibration::SensorCalibration;

/// Configuration for the full frame-pair pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Sensor frame rate in Hz. Default: 10.0
    pub frame_rate: f32,

    /// LiDAR point to region association.
    pub association: PointRegionConfig,

    /// Keypoint-match assignment and outlier rejection.
    pub match_filter: MatchRegionConfig,

    /// Camera TTC estimation.
    pub camera_ttc: CameraTtcConfig,

    /// LiDAR TTC estimation.
    pub lidar_ttc: LidarTtcConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frame_rate: 10.0,
            association: PointRegionConfig::default(),
            match_filter: MatchRegionConfig::default(),
            camera_ttc: CameraTtcConfig::default(),
            lidar_ttc: LidarTtcConfig::default(),
        }
    }
}

/// Both TTC estimates for one linked region pair.
///
/// `None` means the corresponding estimator had no usable data for this
/// pair (NoData); `Some(f32::INFINITY)` means no closing rate was
/// observed. The two estimators are independent: one failing never
/// blanks the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionTtc {
    /// Region ID in the previous frame
    pub prev_region_id: u32,
    /// Region ID in the current frame
    pub curr_region_id: u32,
    /// LiDAR-based TTC in seconds
    pub lidar: Option<f32>,
    /// Camera-based TTC in seconds
    pub camera: Option<f32>,
}

/// Output of one frame-pair pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramePairResult {
    /// Previous-frame region ID → current-frame region ID
    pub correspondences: CorrespondenceMap,
    /// One entry per linked region pair, in previous-frame region order
    pub estimates: Vec<RegionTtc>,
}

/// Per-frame-pair TTC pipeline.
///
/// Construct once per sensor rig with its calibration; `process` may then
/// be called for every consecutive frame pair of a sequence.
#[derive(Debug, Clone)]
pub struct TtcPipeline {
    config: PipelineConfig,
    calibration: SensorCalibration,
    associator: PointRegionAssociator,
    match_filter: MatchRegionFilter,
    camera: CameraTtcEstimator,
    lidar: LidarTtcEstimator,
}

impl TtcPipeline {
    /// Create a pipeline from a configuration and a rig calibration.
    pub fn new(config: PipelineConfig, calibration: SensorCalibration) -> Self {
        Self {
            associator: PointRegionAssociator::new(config.association),
            match_filter: MatchRegionFilter::new(config.match_filter),
            camera: CameraTtcEstimator::new(config.camera_ttc),
            lidar: LidarTtcEstimator::new(config.lidar_ttc),
            config,
            calibration,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Get the rig calibration.
    pub fn calibration(&self) -> &SensorCalibration {
        &self.calibration
    }

    /// Run one association + estimation pass over a frame pair.
    ///
    /// Region collections in both frames are cleared and repopulated, so
    /// repeated calls with the same input produce identical results. Only
    /// index-inconsistent input fails; every per-region condition
    /// (ambiguous points, unmatched regions, empty estimator input) stays
    /// local to its region.
    pub fn process(
        &self,
        prev: &mut SensorFrame,
        curr: &mut SensorFrame,
        matches: &[KeypointMatch],
    ) -> Result<FramePairResult, ValidationError> {
        validate_matches(prev, curr, matches)?;

        prev.clear_associations();
        curr.clear_associations();

        self.associator
            .associate(&mut prev.regions, &prev.lidar_points, &self.calibration);
        self.associator
            .associate(&mut curr.regions, &curr.lidar_points, &self.calibration);

        self.match_filter.assign_and_filter(
            &mut curr.regions,
            &prev.keypoints,
            &curr.keypoints,
            matches,
        );

        let correspondences = track_regions(matches, prev, curr);

        let mut estimates = Vec::with_capacity(correspondences.len());
        for prev_region in &prev.regions {
            let Some(&curr_id) = correspondences.get(&prev_region.id) else {
                continue;
            };
            let Some(curr_region) = curr.region(curr_id) else {
                continue;
            };

            let lidar = self.lidar.estimate(
                &prev_region.lidar_points,
                &curr_region.lidar_points,
                self.config.frame_rate,
            );
            let camera = self.camera.estimate(
                &prev.keypoints,
                &curr.keypoints,
                &curr_region.matches,
                self.config.frame_rate,
            );

            debug!(
                "region {} -> {}: lidar {:?}s camera {:?}s",
                prev_region.id, curr_id, lidar, camera
            );

            estimates.push(RegionTtc {
                prev_region_id: prev_region.id,
                curr_region_id: curr_id,
                lidar,
                camera,
            });
        }

        Ok(FramePairResult {
            correspondences,
            estimates,
        })
    }
}

/// Reject matches referencing keypoints outside either frame's list.
fn validate_matches(
    prev: &SensorFrame,
    curr: &SensorFrame,
    matches: &[KeypointMatch],
) -> Result<(), ValidationError> {
    for m in matches {
        if m.prev_idx >= prev.keypoints.len() {
            return Err(ValidationError::PrevIndexOutOfRange {
                index: m.prev_idx,
                len: prev.keypoints.len(),
            });
        }
        if m.curr_idx >= curr.keypoints.len() {
            return Err(ValidationError::CurrIndexOutOfRange {
                index: m.curr_idx,
                len: curr.keypoints.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DetectionRegion, PixelPoint, Rect2D};

    fn empty_frame_with_keypoints(n: usize) -> SensorFrame {
        let mut frame = SensorFrame::new();
        frame.keypoints = (0..n).map(|i| PixelPoint::new(i as f32, 0.0)).collect();
        frame
    }

    #[test]
    fn test_validation_rejects_bad_prev_index() {
        let prev = empty_frame_with_keypoints(2);
        let curr = empty_frame_with_keypoints(5);

        let result = validate_matches(&prev, &curr, &[KeypointMatch::new(2, 0)]);

        assert_eq!(
            result,
            Err(ValidationError::PrevIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_validation_rejects_bad_curr_index() {
        let prev = empty_frame_with_keypoints(5);
        let curr = empty_frame_with_keypoints(3);

        let result = validate_matches(&prev, &curr, &[KeypointMatch::new(0, 7)]);

        assert_eq!(
            result,
            Err(ValidationError::CurrIndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_validation_rejects_match_into_empty_keypoint_list() {
        let prev = SensorFrame::new();
        let curr = empty_frame_with_keypoints(1);

        let result = validate_matches(&prev, &curr, &[KeypointMatch::new(0, 0)]);

        assert_eq!(
            result,
            Err(ValidationError::PrevIndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_validation_accepts_in_range_matches() {
        let prev = empty_frame_with_keypoints(3);
        let curr = empty_frame_with_keypoints(3);

        let matches = vec![KeypointMatch::new(0, 2), KeypointMatch::new(2, 0)];

        assert!(validate_matches(&prev, &curr, &matches).is_ok());
    }

    #[test]
    fn test_unlinked_region_produces_no_estimate() {
        use nalgebra::{Matrix3x4, Matrix4};

        let calibration = SensorCalibration::new(
            Matrix3x4::identity(),
            Matrix4::identity(),
            Matrix4::identity(),
        );
        let pipeline = TtcPipeline::new(PipelineConfig::default(), calibration);

        let mut prev = SensorFrame::new();
        prev.regions
            .push(DetectionRegion::new(0, Rect2D::new(0.0, 0.0, 10.0, 10.0)));
        let mut curr = SensorFrame::new();
        curr.regions
            .push(DetectionRegion::new(1, Rect2D::new(0.0, 0.0, 10.0, 10.0)));

        let result = pipeline.process(&mut prev, &mut curr, &[]).unwrap();

        assert!(result.correspondences.is_empty());
        assert!(result.estimates.is_empty());
    }
}
