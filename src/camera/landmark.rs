use glam::DVec3;

use super::core::Camera;
use super::transform::TransformState;

/// A named snapshot of a camera pose.
///
/// The snapshot is a value: later camera motion never changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    name: String,
    state: TransformState,
}

impl Landmark {
    /// Capture `camera`'s current pose under `name`.
    #[must_use]
    pub fn new(name: &str, camera: &Camera) -> Self {
        Self {
            name: name.to_owned(),
            state: *camera.state(),
        }
    }

    /// Landmark name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The captured pose.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Captured position.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.state.position
    }

    /// Captured focal point.
    #[must_use]
    pub fn focal_point(&self) -> DVec3 {
        self.state.focal_point
    }

    /// Captured roll in degrees.
    #[must_use]
    pub fn roll(&self) -> f64 {
        self.state.roll
    }

    /// Copy the captured pose back into `camera` and request a redraw.
    pub fn retrieve(&self, camera: &mut Camera) {
        camera.state = self.state;
        camera.refresh();
    }
}
