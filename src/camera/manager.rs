use std::time::Duration;

use log::debug;

use super::animator::AnimationStatus;
use super::core::Camera;
use super::kind::CameraType;
use crate::error::LookoutError;
use crate::options::Options;
use crate::scene::{Actor, Scene};
use crate::view::Interactor;

/// The cameras of one view, exactly one of which is active.
///
/// The collection is never empty: it starts with one camera and refuses to
/// remove the last.
pub struct CameraManager {
    cameras: Vec<Camera>,
    active: usize,
    interactor: Option<Box<dyn Interactor>>,
    /// Whether the interactor was disconnected for a landmark animation.
    input_suspended: bool,
    options: Options,
    viewport: (u32, u32),
}

impl Default for CameraManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraManager {
    /// One exploring camera with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// One camera of the configured type; new cameras inherit `options`.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        let mut manager = Self {
            cameras: Vec::new(),
            active: 0,
            interactor: None,
            input_suspended: false,
            options: options.clone(),
            viewport: (1, 1),
        };
        let _ = manager.create(options.camera.camera_type);
        manager
    }

    // -- Collection --

    /// Append a new camera of `kind` and return it.
    pub fn create(&mut self, kind: CameraType) -> &mut Camera {
        let mut camera = Camera::with_options(&self.options);
        camera.set_type(kind, None);
        camera.set_viewport_size(self.viewport.0, self.viewport.1);
        let index = self.cameras.len();
        debug!("created {} [{kind}] at index {index}", camera.id());
        self.cameras.push(camera);
        &mut self.cameras[index]
    }

    /// Drop every camera and start over with a single one of `kind`.
    ///
    /// Dropped cameras stop following their actors in `scene`.
    pub fn reset(&mut self, kind: CameraType, scene: &mut Scene) {
        for mut camera in self.cameras.drain(..) {
            camera.unfollow(scene);
        }
        self.active = 0;
        let _ = self.create(kind);
        self.input_suspended = false;
        self.connect_active();
    }

    /// Remove the camera at `index` and return it.
    ///
    /// If it was active, the camera that takes its index (or the new last
    /// one) becomes active. The removed camera stops following its actor
    /// in `scene`.
    ///
    /// # Errors
    ///
    /// [`LookoutError::LastCamera`] if only one camera remains,
    /// [`LookoutError::CameraIndexOutOfRange`] for a bad index.
    pub fn remove(
        &mut self,
        index: usize,
        scene: &mut Scene,
    ) -> Result<Camera, LookoutError> {
        if self.cameras.len() == 1 {
            return Err(LookoutError::LastCamera);
        }
        self.check_index(index)?;
        let mut removed = self.cameras.remove(index);
        removed.unfollow(scene);
        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.active = self.active.min(self.cameras.len() - 1);
            self.connect_active();
        }
        debug!("removed {} from index {index}", removed.id());
        Ok(removed)
    }

    /// Camera at `index`.
    ///
    /// # Errors
    ///
    /// [`LookoutError::CameraIndexOutOfRange`] for a bad index.
    pub fn get(&self, index: usize) -> Result<&Camera, LookoutError> {
        self.check_index(index)?;
        Ok(&self.cameras[index])
    }

    /// Mutable camera at `index`.
    ///
    /// # Errors
    ///
    /// [`LookoutError::CameraIndexOutOfRange`] for a bad index.
    pub fn get_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Camera, LookoutError> {
        self.check_index(index)?;
        Ok(&mut self.cameras[index])
    }

    /// Number of cameras (at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether the manager holds no cameras. Never true in practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// All cameras in index order.
    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    // -- Active camera and input --

    /// Make the camera at `index` active and route input to it.
    ///
    /// # Errors
    ///
    /// [`LookoutError::CameraIndexOutOfRange`] for a bad index,
    /// [`LookoutError::NoInteractor`] if no interactor is attached.
    pub fn switch_to(
        &mut self,
        index: usize,
    ) -> Result<&mut Camera, LookoutError> {
        self.check_index(index)?;
        let Some(interactor) = self.interactor.as_mut() else {
            return Err(LookoutError::NoInteractor { index });
        };
        self.active = index;
        let camera = &mut self.cameras[index];
        interactor.connect_camera(camera.id());
        debug!("switched to {} at index {index}", camera.id());
        Ok(camera)
    }

    /// Index of the active camera.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active camera.
    #[must_use]
    pub fn active(&self) -> &Camera {
        &self.cameras[self.active]
    }

    /// The active camera, mutably.
    pub fn active_mut(&mut self) -> &mut Camera {
        &mut self.cameras[self.active]
    }

    /// Attach the view's interactor and bind it to the active camera.
    pub fn set_interactor(&mut self, interactor: Box<dyn Interactor>) {
        self.interactor = Some(interactor);
        self.input_suspended = false;
        self.connect_active();
    }

    /// Detach the interactor.
    pub fn take_interactor(&mut self) -> Option<Box<dyn Interactor>> {
        self.input_suspended = false;
        self.interactor.take()
    }

    /// Whether user input is currently suspended by an animation.
    #[must_use]
    pub fn input_suspended(&self) -> bool {
        self.input_suspended
    }

    // -- Per-frame plumbing --

    /// Propagate a viewport resize to every camera.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        for camera in &mut self.cameras {
            camera.set_viewport_size(width, height);
        }
    }

    /// Advance every camera's landmark playback.
    ///
    /// Input is disconnected while any camera animates and reconnected
    /// once all are idle.
    pub fn tick(&mut self, dt: Duration) -> AnimationStatus {
        self.sync_input();
        let mut status = AnimationStatus::Idle;
        for camera in &mut self.cameras {
            if camera.tick(dt) == AnimationStatus::Running {
                status = AnimationStatus::Running;
            }
        }
        self.sync_input();
        status
    }

    /// Suspend or resume the interactor to match the animation state.
    ///
    /// [`tick`](Self::tick) calls this; call it directly to silence input
    /// as soon as an animation starts.
    pub fn sync_input(&mut self) {
        let animating = self.cameras.iter().any(Camera::is_animating);
        let Some(interactor) = self.interactor.as_mut() else {
            return;
        };
        if animating && !self.input_suspended {
            interactor.disconnect_from_view();
            self.input_suspended = true;
        } else if !animating && self.input_suspended {
            interactor.reconnect_view();
            self.input_suspended = false;
        }
    }

    /// Deliver an actor's motion to the cameras following it.
    pub fn notify_actor_moved(&mut self, actor: &Actor) {
        for id in actor.tracking_cameras() {
            if let Some(camera) =
                self.cameras.iter_mut().find(|c| c.id() == *id)
            {
                camera.update_with_actor(actor);
            }
        }
    }

    /// Consume pending redraw requests from every camera.
    pub fn take_redraw_request(&mut self) -> bool {
        self.cameras
            .iter_mut()
            .fold(false, |acc, c| c.take_redraw_request() || acc)
    }

    fn check_index(&self, index: usize) -> Result<(), LookoutError> {
        if index < self.cameras.len() {
            Ok(())
        } else {
            Err(LookoutError::CameraIndexOutOfRange {
                index,
                len: self.cameras.len(),
            })
        }
    }

    fn connect_active(&mut self) {
        let id = self.cameras[self.active].id();
        if let Some(interactor) = self.interactor.as_mut() {
            interactor.connect_camera(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec3;

    use super::*;
    use crate::camera::{CameraId, LandmarkHop, TrackingMode};
    use crate::util::easing::EasingFunction;
    use crate::scene::{BoundingBox, Scene};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Connect(CameraId),
        Disconnect,
        Reconnect,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Event>>>);

    impl Recorder {
        fn events(&self) -> Vec<Event> {
            self.0.borrow().clone()
        }
    }

    impl Interactor for Recorder {
        fn connect_camera(&mut self, camera: CameraId) {
            self.0.borrow_mut().push(Event::Connect(camera));
        }

        fn disconnect_from_view(&mut self) {
            self.0.borrow_mut().push(Event::Disconnect);
        }

        fn reconnect_view(&mut self) {
            self.0.borrow_mut().push(Event::Reconnect);
        }
    }

    #[test]
    fn starts_with_one_exploring_camera() {
        let manager = CameraManager::new();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active().camera_type(), CameraType::Exploring);
        assert!(manager.active().world_rotation_inverted());
    }

    #[test]
    fn last_camera_cannot_be_removed() {
        let mut scene = Scene::new();
        let mut manager = CameraManager::new();
        assert!(matches!(
            manager.remove(0, &mut scene),
            Err(LookoutError::LastCamera)
        ));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn out_of_range_indices_fail() {
        let mut manager = CameraManager::new();
        let _ = manager.create(CameraType::Orbiting);
        assert!(matches!(
            manager.get(2),
            Err(LookoutError::CameraIndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(manager.get_mut(5).is_err());
        assert!(manager.remove(2, &mut Scene::new()).is_err());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn remove_adjusts_active_index() {
        let mut scene = Scene::new();
        let mut manager = CameraManager::new();
        let _ = manager.create(CameraType::Orbiting);
        let third = manager.create(CameraType::Tracking).id();
        manager.set_interactor(Box::new(Recorder::default()));
        let _ = manager.switch_to(2).unwrap();

        let removed = manager.remove(0, &mut scene).unwrap();
        assert_eq!(removed.camera_type(), CameraType::Exploring);
        assert_eq!(manager.active_index(), 1);
        assert_eq!(manager.active().id(), third);

        let _ = manager.remove(1, &mut scene).unwrap();
        assert_eq!(manager.active_index(), 0);
        assert_eq!(manager.active().camera_type(), CameraType::Orbiting);
    }

    #[test]
    fn switch_requires_interactor() {
        let mut manager = CameraManager::new();
        let _ = manager.create(CameraType::Orbiting);
        assert!(matches!(
            manager.switch_to(1),
            Err(LookoutError::NoInteractor { index: 1 })
        ));
        assert_eq!(manager.active_index(), 0);

        let recorder = Recorder::default();
        manager.set_interactor(Box::new(recorder.clone()));
        let id = manager.switch_to(1).unwrap().id();
        assert_eq!(manager.active_index(), 1);
        assert_eq!(recorder.events().last(), Some(&Event::Connect(id)));
        assert!(manager.switch_to(7).is_err());
    }

    #[test]
    fn reset_replaces_all_cameras() {
        let mut manager = CameraManager::new();
        let _ = manager.create(CameraType::Orbiting);
        let _ = manager.create(CameraType::Orbiting);
        manager.reset(CameraType::Tracking, &mut Scene::new());
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.active().camera_type(), CameraType::Tracking);
    }

    #[test]
    fn animation_suspends_input() {
        let mut manager = CameraManager::new();
        let recorder = Recorder::default();
        manager.set_interactor(Box::new(recorder.clone()));
        let camera = manager.active_mut();
        camera.set_landmark("start");
        camera.set_position(DVec3::new(0.0, 0.0, 8.0));
        let _token = camera
            .do_landmark_animation(vec![LandmarkHop::new("start", 100, 20.0)]);

        let status = manager.tick(Duration::from_millis(50));
        assert_eq!(status, AnimationStatus::Running);
        assert!(manager.input_suspended());

        for _ in 0..3 {
            let _ = manager.tick(Duration::from_millis(50));
        }
        assert!(!manager.input_suspended());
        assert_eq!(
            &recorder.events()[1..],
            &[Event::Disconnect, Event::Reconnect]
        );
        assert!(manager.take_redraw_request());
    }

    #[test]
    fn actor_motion_reaches_tracking_camera() {
        let mut scene = Scene::new();
        let id = scene.add_actor(
            "beacon",
            BoundingBox::new(DVec3::splat(-1.0), DVec3::ONE),
        );
        let mut manager = CameraManager::new();
        let camera = manager.create(CameraType::Orbiting);
        camera.set_position(DVec3::new(0.0, 0.0, 10.0));
        camera
            .follow(&mut scene, &id.into(), Some(TrackingMode::Rotational))
            .unwrap();

        scene
            .move_actor(id, DVec3::new(1.0, 0.0, 0.0), &mut manager)
            .unwrap();
        let camera = manager.get(1).unwrap();
        assert_eq!(camera.focal_point(), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(camera.position(), DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(manager.get(0).unwrap().focal_point(), DVec3::ZERO);
    }

    #[test]
    fn removed_cameras_stop_following() {
        let mut scene = Scene::new();
        let id = scene.add_actor(
            "beacon",
            BoundingBox::new(DVec3::splat(-1.0), DVec3::ONE),
        );
        let mut manager = CameraManager::new();
        let mode = Some(TrackingMode::Rotational);
        manager
            .create(CameraType::Orbiting)
            .follow(&mut scene, &id.into(), mode)
            .unwrap();
        let removed = manager.remove(1, &mut scene).unwrap();
        assert_eq!(removed.following(), None);
        assert!(scene.actor(id).unwrap().tracking_cameras().is_empty());

        manager
            .active_mut()
            .follow(&mut scene, &id.into(), mode)
            .unwrap();
        manager
            .create(CameraType::Orbiting)
            .follow(&mut scene, &id.into(), mode)
            .unwrap();
        assert_eq!(scene.actor(id).unwrap().tracking_cameras().len(), 2);
        manager.reset(CameraType::Orbiting, &mut scene);
        assert!(scene.actor(id).unwrap().tracking_cameras().is_empty());
    }

    #[test]
    fn actor_motion_mid_animation_is_kept() {
        let mut scene = Scene::new();
        let id = scene.add_actor(
            "beacon",
            BoundingBox::new(DVec3::splat(-1.0), DVec3::ONE),
        );
        let mut manager = CameraManager::new();
        let camera = manager.create(CameraType::Orbiting);
        camera.set_position(DVec3::new(0.0, 0.0, 10.0));
        camera
            .follow(&mut scene, &id.into(), Some(TrackingMode::Rotational))
            .unwrap();
        camera.set_landmark("home");
        camera.set_position(DVec3::new(0.0, 0.0, 20.0));
        let twenty_steps = Some(Duration::from_millis(1000));
        assert!(camera.goto_landmark("home", twenty_steps, Some(20.0)));

        let frame = Duration::from_millis(50);
        let _ = manager.tick(frame);
        scene
            .move_actor(id, DVec3::new(3.0, 0.0, 0.0), &mut manager)
            .unwrap();
        let camera = manager.get(1).unwrap();
        assert_eq!(camera.focal_point(), DVec3::new(3.0, 0.0, 0.0));
        let from = camera.position();

        let _ = manager.tick(frame);
        let k = EasingFunction::Cosine.evaluate(2.0 / 20.0);
        let camera = manager.get(1).unwrap();
        assert!(camera
            .focal_point()
            .abs_diff_eq(DVec3::new(3.0 * (1.0 - k), 0.0, 0.0), 1e-9));
        assert!(camera
            .position()
            .abs_diff_eq(from.lerp(DVec3::new(0.0, 0.0, 10.0), k), 1e-9));
        assert!(camera.is_animating());
    }

    #[test]
    fn viewport_size_reaches_new_cameras() {
        let mut manager = CameraManager::new();
        manager.set_viewport_size(800, 400);
        let camera = manager.create(CameraType::Orbiting);
        assert_eq!(camera.aspect_ratio(), 2.0);
        assert_eq!(manager.get(0).unwrap().aspect_ratio(), 2.0);
    }
}
