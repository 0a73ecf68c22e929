use std::fmt;

use glam::DVec3;

use super::BoundingBox;
use crate::camera::CameraId;

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Stable identifier of an actor within its [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub(super) u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a caller names an actor: by handle or by scene name.
///
/// Resolved once at the call boundary with
/// [`Scene::resolve`](super::Scene::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRef {
    /// A handle returned by [`Scene::add_actor`](super::Scene::add_actor).
    Handle(ActorId),
    /// The actor's name; the first actor added with this name wins.
    Name(String),
}

impl From<ActorId> for ActorRef {
    fn from(id: ActorId) -> Self {
        Self::Handle(id)
    }
}

impl From<&str> for ActorRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handle(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// A movable scene object that cameras can follow.
///
/// Only the parts a camera reads are modelled: position, the last
/// translation, the world bounding box, and the list of cameras tracking it.
#[derive(Debug, Clone)]
pub struct Actor {
    pub(super) id: ActorId,
    name: String,
    position: DVec3,
    translation: DVec3,
    bounding_box: BoundingBox,
    tracking_cameras: Vec<CameraId>,
}

impl Actor {
    pub(super) fn new(id: ActorId, name: &str, bounds: BoundingBox) -> Self {
        Self {
            id,
            name: name.to_owned(),
            position: DVec3::ZERO,
            translation: DVec3::ZERO,
            bounding_box: bounds,
            tracking_cameras: Vec::new(),
        }
    }

    /// Actor handle.
    #[must_use]
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Actor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Offset applied by the most recent move.
    #[must_use]
    pub fn translation_delta(&self) -> DVec3 {
        self.translation
    }

    /// World-space bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Cameras currently following this actor, in registration order.
    #[must_use]
    pub fn tracking_cameras(&self) -> &[CameraId] {
        &self.tracking_cameras
    }

    /// Moves the actor to `position`, recording the delta from the old one.
    pub fn set_position(&mut self, position: DVec3) {
        self.translation = position - self.position;
        self.position = position;
        self.bounding_box = self.bounding_box.translated(self.translation);
    }

    /// Moves the actor by `delta`.
    pub fn translate(&mut self, delta: DVec3) {
        self.translation = delta;
        self.position += delta;
        self.bounding_box = self.bounding_box.translated(delta);
    }

    /// Registers a camera as a follower. Registering twice is a no-op.
    pub fn add_tracking_camera(&mut self, camera: CameraId) {
        if !self.tracking_cameras.contains(&camera) {
            self.tracking_cameras.push(camera);
        }
    }

    /// Deregisters a follower.
    pub fn remove_tracking_camera(&mut self, camera: CameraId) {
        self.tracking_cameras.retain(|c| *c != camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_actor() -> Actor {
        Actor::new(
            ActorId(0),
            "cone",
            BoundingBox::new(DVec3::splat(-1.0), DVec3::ONE),
        )
    }

    #[test]
    fn set_position_records_delta_and_moves_bounds() {
        let mut actor = unit_actor();
        actor.set_position(DVec3::new(2.0, 0.0, 0.0));
        actor.set_position(DVec3::new(3.0, 1.0, 0.0));
        assert_eq!(actor.translation_delta(), DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(actor.bounding_box().center(), DVec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn translate_accumulates_position() {
        let mut actor = unit_actor();
        actor.translate(DVec3::X);
        actor.translate(DVec3::X);
        assert_eq!(actor.position(), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(actor.translation_delta(), DVec3::X);
    }
}
