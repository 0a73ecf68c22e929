//! Shared helpers: easing curves and frame timing.

pub mod easing;
pub mod frame_timing;
