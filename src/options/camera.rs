use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera type, projection and initial pose for new cameras.
pub struct CameraOptions {
    /// Type of the first camera and of cameras created without one.
    #[schemars(skip)]
    pub camera_type: CameraType,
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 10.0, max = 120.0),
        extend("step" = 1.0)
    )]
    pub fov: f64,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near: f64,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far: f64,
    /// Fixed aspect ratio; absent means follow the viewport.
    #[schemars(skip)]
    pub aspect: Option<f64>,
    /// Initial camera position.
    #[schemars(skip)]
    pub position: [f64; 3],
    /// Initial focal point.
    #[schemars(skip)]
    pub focal_point: [f64; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            camera_type: CameraType::Exploring,
            fov: 30.0,
            near: 0.1,
            far: 10_000.0,
            aspect: None,
            position: [0.0, 0.0, 1.0],
            focal_point: [0.0, 0.0, 0.0],
        }
    }
}
