//! The slice of the scene a camera talks to: actors it can follow or frame,
//! and the global bounding box used for long shots.
//!
//! Actor motion goes through [`Scene::move_actor`] or
//! [`Scene::translate_actor`], which deliver the motion directly to every
//! camera registered on the actor.

mod actor;
mod bounds;

pub use actor::{Actor, ActorId, ActorRef};
pub use bounds::BoundingBox;
use glam::DVec3;
use rustc_hash::FxHashMap;

use crate::camera::CameraManager;
use crate::error::LookoutError;

/// Actor registry with lookup by handle and by name.
#[derive(Debug, Default)]
pub struct Scene {
    /// Actors in insertion order.
    actors: Vec<Actor>,
    /// Handle → index into `actors`.
    index: FxHashMap<ActorId, usize>,
    next_actor_id: u32,
    /// Last computed global bounding box.
    bounding_box: BoundingBox,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor at the origin with the given world bounds.
    pub fn add_actor(&mut self, name: &str, bounds: BoundingBox) -> ActorId {
        let id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;
        let _ = self.index.insert(id, self.actors.len());
        self.actors.push(Actor::new(id, name, bounds));
        id
    }

    /// Number of actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the scene has no actors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Actor by handle.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.index.get(&id).map(|&i| &self.actors[i])
    }

    /// Mutable actor by handle.
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        let i = *self.index.get(&id)?;
        self.actors.get_mut(i)
    }

    /// First actor added with `name`.
    #[must_use]
    pub fn actor_by_name(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name() == name)
    }

    /// Resolve a handle-or-name reference to its actor handle.
    #[must_use]
    pub fn resolve(&self, actor: &ActorRef) -> Option<ActorId> {
        match actor {
            ActorRef::Handle(id) => self.actor(*id).map(Actor::id),
            ActorRef::Name(name) => self.actor_by_name(name).map(Actor::id),
        }
    }

    /// Resolve a reference or report which actor was missing.
    ///
    /// # Errors
    ///
    /// [`LookoutError::ActorNotFound`] when nothing matches.
    pub fn require(&self, actor: &ActorRef) -> Result<&Actor, LookoutError> {
        self.resolve(actor)
            .and_then(|id| self.actor(id))
            .ok_or_else(|| LookoutError::ActorNotFound(actor.to_string()))
    }

    /// Recompute the union of all actor bounding boxes.
    pub fn compute_bounding_box(&mut self) -> BoundingBox {
        self.bounding_box = self
            .actors
            .iter()
            .map(Actor::bounding_box)
            .reduce(|acc, bb| acc.union(&bb))
            .unwrap_or_default();
        self.bounding_box
    }

    /// The bounding box from the last
    /// [`compute_bounding_box`](Self::compute_bounding_box).
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Move an actor and notify the cameras following it.
    ///
    /// # Errors
    ///
    /// [`LookoutError::ActorNotFound`] for an unknown handle.
    pub fn move_actor(
        &mut self,
        id: ActorId,
        position: DVec3,
        cameras: &mut CameraManager,
    ) -> Result<(), LookoutError> {
        let actor = self
            .actor_mut(id)
            .ok_or_else(|| LookoutError::ActorNotFound(id.to_string()))?;
        actor.set_position(position);
        cameras.notify_actor_moved(actor);
        Ok(())
    }

    /// Translate an actor and notify the cameras following it.
    ///
    /// # Errors
    ///
    /// [`LookoutError::ActorNotFound`] for an unknown handle.
    pub fn translate_actor(
        &mut self,
        id: ActorId,
        delta: DVec3,
        cameras: &mut CameraManager,
    ) -> Result<(), LookoutError> {
        let actor = self
            .actor_mut(id)
            .ok_or_else(|| LookoutError::ActorNotFound(id.to_string()))?;
        actor.translate(delta);
        cameras.notify_actor_moved(actor);
        Ok(())
    }
}
