//! Input validation errors.
//!
//! The core algorithms assume index-consistent input; violations are
//! rejected at the pipeline boundary before any algorithm runs.

use thiserror::Error;

/// Malformed frame-pair input detected at the pipeline boundary.
///
/// All other failure modes in this crate are local and non-fatal (an
/// estimator returning `None`, a point dropped as ambiguous); only
/// index-inconsistent input is rejected outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A keypoint match references a previous-frame keypoint index that is
    /// out of range for the previous frame's keypoint list.
    #[error("match references previous-frame keypoint {index}, but the frame has {len} keypoints")]
    PrevIndexOutOfRange {
        /// Offending keypoint index.
        index: usize,
        /// Length of the previous frame's keypoint list.
        len: usize,
    },

    /// A keypoint match references a current-frame keypoint index that is
    /// out of range for the current frame's keypoint list.
    #[error("match references current-frame keypoint {index}, but the frame has {len} keypoints")]
    CurrIndexOutOfRange {
        /// Offending keypoint index.
        index: usize,
        /// Length of the current frame's keypoint list.
        len: usize,
    },
}
