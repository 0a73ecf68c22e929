use glam::Mat4;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the view-projection matrix and camera
/// metadata, narrowed to `f32` for upload.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Viewing direction (from the camera toward the focal point).
    pub view_dir: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Identity view-projection looking down -Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            view_dir: [0.0, 0.0, -1.0],
            fovy: 30.0,
        }
    }

    /// Build a uniform from a camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update(camera);
        uniform
    }

    /// Refresh every field from `camera`.
    pub fn update(&mut self, camera: &Camera) {
        self.view_proj = camera.view_projection().as_mat4().to_cols_array_2d();
        self.position = camera.position().as_vec3().to_array();
        self.aspect = camera.aspect_ratio() as f32;
        self.view_dir = (-camera.forward()).as_vec3().to_array();
        self.fovy = camera.field_of_view() as f32;
    }
}
