//! Easing functions for landmark transitions.
//!
//! Each curve maps linear progress in `[0, 1]` onto eased progress in
//! `[0, 1]`. Landmark animation defaults to [`EasingFunction::Cosine`].

use std::f64::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Half-cosine ease-in-out: `(1 - cos(t·π)) / 2`.
    Cosine,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control point.
        c1: f64,
        /// Second inner control point.
        c2: f64,
    },
}

impl EasingFunction {
    /// Default easing function for landmark transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::Cosine;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::Cosine => (1.0 - (t * PI).cos()) / 2.0,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
