//! Camera system: poses, navigation, actor tracking and landmarks.
//!
//! A [`Camera`] keeps its pose in a [`TransformState`] and exposes
//! absolute and relative navigation. Behaviour that differs per
//! [`CameraType`] is concentrated in [`kind`]. A [`CameraManager`] owns the
//! cameras of one view and drives their landmark animations.

/// Stepwise landmark transitions and multi-hop sequences.
pub mod animator;
mod core;
/// Camera types, tracking modes and their composition rules.
pub mod kind;
mod landmark;
mod landmarks;
mod manager;
mod navigation;
mod tracking;
/// Pose representation and its derivations.
pub mod transform;
/// GPU uniform packing of the camera state.
pub mod uniform;

pub use animator::{
    AnimationStatus, CancellationToken, LandmarkHop, LandmarkTransition,
};
pub use self::core::{Camera, CameraId, Projection};
pub use kind::{CameraType, TrackingMode};
pub use landmark::Landmark;
pub use manager::CameraManager;
pub use transform::{wrap_angle, TransformState, MIN_DISTANCE};
pub use uniform::CameraUniform;
