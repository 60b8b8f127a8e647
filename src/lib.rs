//! DrishtiFusion - Camera/LiDAR fusion engine for time-to-collision estimation
//!
//! Estimates, per tracked object across a pair of time-consecutive sensor
//! frames, the time-to-collision (TTC) between the observing platform and
//! that object from two independent modalities: sparse 3D LiDAR returns and
//! 2D keypoint correspondences. The crate also performs the data association
//! that makes per-object estimation possible: projecting LiDAR points into
//! detection regions, linking regions across frames by keypoint-match voting,
//! and filtering spurious matches before they pollute an estimate.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Orchestration
//! │        (frame-pair pipeline, input validation)      │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  algorithms/                        │  ← Core algorithms
//! │           (association, TTC estimation)             │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   sensors/                          │  ← Sensor processing
//! │          (calibration, point clustering)            │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                (types, math)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Pipeline
//!
//! For one frame pair the [`TtcPipeline`] runs:
//!
//! 1. LiDAR points are projected into the image plane and assigned to the
//!    unique detection region that encloses them (ambiguous points dropped).
//! 2. Keypoint matches are assigned to current-frame regions and filtered
//!    for outliers by distance-from-mean.
//! 3. Regions are linked across the frame pair by match voting.
//! 4. For each linked pair, a LiDAR TTC (clustered closest in-lane distance)
//!    and a camera TTC (median keypoint distance-ratio) are estimated
//!    independently.
//!
//! ```rust,ignore
//! use drishti_fusion::{PipelineConfig, SensorCalibration, SensorFrame, TtcPipeline};
//!
//! let pipeline = TtcPipeline::new(PipelineConfig::default(), calibration);
//! let result = pipeline.process(&mut prev_frame, &mut curr_frame, &matches)?;
//!
//! for estimate in &result.estimates {
//!     println!(
//!         "region {} -> {}: lidar {:?} s, camera {:?} s",
//!         estimate.prev_region_id, estimate.curr_region_id,
//!         estimate.lidar, estimate.camera,
//!     );
//! }
//! ```
//!
//! # Coordinate systems
//!
//! LiDAR points follow the sensor convention X forward, Y left, Z up, in
//! meters. Image-plane coordinates are pixels with X right, Y down. The
//! fixed projection / rectification / extrinsic matrix triple mapping one
//! into the other is supplied by the caller as a [`SensorCalibration`].

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Sensor processing (depends on core)
// ============================================================================
pub mod sensors;

// ============================================================================
// Layer 3: Algorithms (depends on core, sensors)
// ============================================================================
pub mod algorithms;

// ============================================================================
// Layer 4: Pipeline engine (depends on all layers)
// ============================================================================
pub mod engine;

mod error;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use core::math;
pub use core::types::{CorrespondenceMap, KeypointMatch, SensorFrame};
pub use core::types::{DetectionRegion, Rect2D};
pub use core::types::{LidarPoint, PixelPoint};

// Sensor processing
pub use sensors::calibration::SensorCalibration;
pub use sensors::preprocessing::{EuclideanClusterConfig, EuclideanClusterFilter};

// Association
pub use algorithms::association::track_regions;
pub use algorithms::association::{MatchRegionConfig, MatchRegionFilter};
pub use algorithms::association::{PointRegionAssociator, PointRegionConfig};

// Estimation
pub use algorithms::estimation::{CameraTtcConfig, CameraTtcEstimator};
pub use algorithms::estimation::{LidarTtcConfig, LidarTtcEstimator};

// Engine
pub use engine::pipeline::{FramePairResult, PipelineConfig, RegionTtc, TtcPipeline};

pub use error::ValidationError;
