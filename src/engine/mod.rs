//! Pipeline orchestration layer.
//!
//! Coordinates association and estimation into a per-frame-pair pipeline.
//!
//! # Contents
//!
//! - [`pipeline`]: Frame-pair TTC pipeline and its result types

pub mod pipeline;
