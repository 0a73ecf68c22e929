//! Following actors and reacting to their motion.

use log::debug;

use super::core::Camera;
use super::kind::{CameraType, TrackingMode};
use crate::error::LookoutError;
use crate::scene::{Actor, ActorRef, Scene};

impl Camera {
    /// Turn this camera into a tracking camera following `actor`.
    ///
    /// The actor is resolved first; on failure nothing changes. A camera
    /// already following another actor is deregistered from it.
    ///
    /// # Errors
    ///
    /// [`LookoutError::ActorNotFound`] if `actor` does not resolve.
    pub fn follow(
        &mut self,
        scene: &mut Scene,
        actor: &ActorRef,
        tracking_mode: Option<TrackingMode>,
    ) -> Result<(), LookoutError> {
        let target = scene.require(actor)?.id();
        self.unfollow(scene);
        self.set_type(CameraType::Tracking, tracking_mode);
        if let Some(actor) = scene.actor_mut(target) {
            actor.add_tracking_camera(self.id);
        }
        self.following = Some(target);
        debug!("{} follows actor {target}", self.id);
        Ok(())
    }

    /// Stop following the current actor. No-op when following nothing.
    pub fn unfollow(&mut self, scene: &mut Scene) {
        let Some(target) = self.following.take() else {
            return;
        };
        if let Some(actor) = scene.actor_mut(target) {
            actor.remove_tracking_camera(self.id);
        }
        debug!("{} stopped following actor {target}", self.id);
    }

    /// React to the followed actor having moved.
    ///
    /// Ignored for actors this camera does not follow.
    pub fn update_with_actor(&mut self, actor: &Actor) {
        if self.following != Some(actor.id()) {
            return;
        }
        match self.tracking_mode {
            TrackingMode::Default => {}
            TrackingMode::Rotational | TrackingMode::Cinematic => {
                self.set_focal_point(actor.position());
            }
            TrackingMode::Translational => {
                self.translate(actor.translation_delta());
                self.set_focal_point(actor.position());
            }
        }
    }

    /// Aim at an actor's position.
    ///
    /// # Errors
    ///
    /// [`LookoutError::ActorNotFound`] if `actor` does not resolve.
    pub fn look_at(
        &mut self,
        scene: &Scene,
        actor: &ActorRef,
    ) -> Result<(), LookoutError> {
        let position = scene.require(actor)?.position();
        self.set_focal_point(position);
        Ok(())
    }

    /// Frame an actor's bounding box with [`shot`](Self::shot).
    ///
    /// # Errors
    ///
    /// [`LookoutError::ActorNotFound`] if `actor` does not resolve.
    pub fn close_up(
        &mut self,
        scene: &Scene,
        actor: &ActorRef,
    ) -> Result<(), LookoutError> {
        let bounds = scene.require(actor)?.bounding_box();
        self.shot(&bounds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::scene::{ActorId, BoundingBox};

    fn scene_with_cube() -> (Scene, ActorId) {
        let mut scene = Scene::new();
        let id = scene.add_actor(
            "cube",
            BoundingBox::new(DVec3::splat(-1.0), DVec3::ONE),
        );
        (scene, id)
    }

    fn tracking_at_z10(scene: &mut Scene, mode: TrackingMode) -> Camera {
        let mut camera = Camera::new(CameraType::Orbiting);
        camera.set_position(DVec3::new(0.0, 0.0, 10.0));
        camera.follow(scene, &"cube".into(), Some(mode)).unwrap();
        camera
    }

    #[test]
    fn follow_registers_and_switches_type() {
        let (mut scene, id) = scene_with_cube();
        let camera = tracking_at_z10(&mut scene, TrackingMode::Rotational);
        assert_eq!(camera.camera_type(), CameraType::Tracking);
        assert_eq!(camera.tracking_mode(), TrackingMode::Rotational);
        assert_eq!(camera.following(), Some(id));
        assert_eq!(scene.actor(id).unwrap().tracking_cameras(), &[camera.id()]);
    }

    #[test]
    fn follow_unknown_actor_leaves_camera_alone() {
        let (mut scene, _) = scene_with_cube();
        let mut camera = Camera::new(CameraType::Orbiting);
        let err = camera.follow(&mut scene, &"ghost".into(), None);
        assert!(matches!(err, Err(LookoutError::ActorNotFound(_))));
        assert_eq!(camera.camera_type(), CameraType::Orbiting);
        assert_eq!(camera.following(), None);
    }

    #[test]
    fn rotational_tracking_aims_without_moving() {
        let (mut scene, id) = scene_with_cube();
        let mut camera = tracking_at_z10(&mut scene, TrackingMode::Rotational);
        let actor = scene.actor_mut(id).unwrap();
        actor.set_position(DVec3::X);
        camera.update_with_actor(actor);
        assert_eq!(camera.focal_point(), DVec3::X);
        assert_eq!(camera.position(), DVec3::new(0.0, 0.0, 10.0));
        assert!((camera.distance() - 101f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn translational_tracking_moves_with_actor() {
        let (mut scene, id) = scene_with_cube();
        let mut camera =
            tracking_at_z10(&mut scene, TrackingMode::Translational);
        let actor = scene.actor_mut(id).unwrap();
        actor.translate(DVec3::new(2.0, 0.0, 0.0));
        camera.update_with_actor(actor);
        assert!(camera
            .position()
            .abs_diff_eq(DVec3::new(2.0, 0.0, 10.0), 1e-12));
        assert_eq!(camera.focal_point(), DVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn default_mode_ignores_motion() {
        let (mut scene, id) = scene_with_cube();
        let mut camera = tracking_at_z10(&mut scene, TrackingMode::Default);
        let before = *camera.state();
        let actor = scene.actor_mut(id).unwrap();
        actor.set_position(DVec3::new(3.0, 3.0, 3.0));
        camera.update_with_actor(actor);
        assert_eq!(*camera.state(), before);
    }

    #[test]
    fn cinematic_tracking_keeps_axes_orthonormal() {
        let (mut scene, id) = scene_with_cube();
        let mut camera = tracking_at_z10(&mut scene, TrackingMode::Cinematic);
        let actor = scene.actor_mut(id).unwrap();
        actor.set_position(DVec3::new(4.0, 6.0, 0.0));
        camera.update_with_actor(actor);
        assert_eq!(camera.focal_point(), DVec3::new(4.0, 6.0, 0.0));
        assert!(camera.right().dot(camera.up()).abs() < 1e-9);
        assert!(camera.up().dot(camera.forward()).abs() < 1e-9);
    }

    #[test]
    fn unfollow_deregisters() {
        let (mut scene, id) = scene_with_cube();
        let mut camera = tracking_at_z10(&mut scene, TrackingMode::Rotational);
        camera.unfollow(&mut scene);
        camera.unfollow(&mut scene);
        assert!(scene.actor(id).unwrap().tracking_cameras().is_empty());
        assert_eq!(camera.following(), None);
    }

    #[test]
    fn clone_of_follower_is_not_registered() {
        let (mut scene, id) = scene_with_cube();
        let camera = tracking_at_z10(&mut scene, TrackingMode::Rotational);
        let mut copy = camera.clone();
        assert_eq!(copy.following(), None);
        assert_eq!(copy.camera_type(), CameraType::Tracking);
        assert_eq!(scene.actor(id).unwrap().tracking_cameras(), &[camera.id()]);

        let actor = scene.actor_mut(id).unwrap();
        actor.set_position(DVec3::X);
        copy.update_with_actor(actor);
        assert_eq!(copy.focal_point(), DVec3::ZERO);
    }

    #[test]
    fn look_at_and_close_up_resolve_actors() {
        let (mut scene, id) = scene_with_cube();
        scene.actor_mut(id).unwrap().set_position(DVec3::new(1.0, 2.0, 3.0));
        let mut camera = Camera::new(CameraType::Orbiting);
        camera.look_at(&scene, &id.into()).unwrap();
        assert_eq!(camera.focal_point(), DVec3::new(1.0, 2.0, 3.0));
        camera.close_up(&scene, &"cube".into()).unwrap();
        assert!(camera
            .focal_point()
            .abs_diff_eq(DVec3::new(1.0, 2.0, 3.0), 1e-9));
        assert!(camera.look_at(&scene, &"nope".into()).is_err());
    }
}
