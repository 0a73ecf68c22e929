use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Defaults for animated landmark transitions.
pub struct AnimationOptions {
    /// Step rate used when a transition does not name one.
    #[schemars(
        title = "Landmark FPS",
        range(min = 1.0, max = 120.0),
        extend("step" = 1.0)
    )]
    pub default_fps: f64,
    /// Curve applied to transition progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Combined position and focal-point error below which a transition
    /// snaps to its destination.
    #[schemars(skip)]
    pub arrival_tolerance: f64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            default_fps: 20.0,
            easing: EasingFunction::DEFAULT,
            arrival_tolerance: 0.01,
        }
    }
}
