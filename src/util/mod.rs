//! Shared utilities for the scene core.
//!
//! Helpers for frame timing and the interpolation/smoothing steps used by
//! the pose driver and camera rig.

pub mod easing;
pub mod frame_clock;
