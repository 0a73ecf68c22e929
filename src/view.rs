//! The seam between cameras and the input layer of a view.
//!
//! Mouse/keyboard dispatch lives outside this crate. A
//! [`CameraManager`](crate::camera::CameraManager) only needs to rebind the
//! interactor to the active camera and to silence it while a landmark
//! animation owns the camera.

use crate::camera::CameraId;

/// Input handler attached to a view.
pub trait Interactor {
    /// Route subsequent user input to `camera`.
    fn connect_camera(&mut self, camera: CameraId);

    /// Stop accepting user input.
    fn disconnect_from_view(&mut self);

    /// Resume accepting user input.
    fn reconnect_view(&mut self);
}
