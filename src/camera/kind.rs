//! Camera types and the composition rules that differ between them.
//!
//! All mode-dependent math lives here so each rule can be tested on its own:
//! [`CameraType::inverts_world_rotation`], [`CameraType::compose_matrix`] and
//! [`CameraType::derive_anchor`].

use std::fmt;

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use super::transform::TransformState;

/// How a camera composes its angles into a pose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum CameraType {
    /// Orbits a fixed focal point.
    Orbiting,
    /// First-person: the position is fixed, the focal point moves.
    Tracking,
    /// Free rotation in the camera's local frame around the focal point.
    #[default]
    Exploring,
}

/// How a tracking camera reacts when its followed actor moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingMode {
    /// Ignore actor motion.
    #[default]
    Default,
    /// Stay in place and keep looking at the actor.
    Rotational,
    /// Move with the actor, then look at it.
    Translational,
    /// Like rotational, but the up vector banks with the look direction.
    Cinematic,
}

impl CameraType {
    /// Parse a camera type name (case-insensitive).
    ///
    /// Unknown names fall back to [`CameraType::Exploring`] with a warning.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "ORBITING" => Self::Orbiting,
            "TRACKING" => Self::Tracking,
            "EXPLORING" => Self::Exploring,
            _ => {
                log::warn!(
                    "camera type [{name}] unknown, using EXPLORING instead"
                );
                Self::Exploring
            }
        }
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Orbiting => "ORBITING",
            Self::Tracking => "TRACKING",
            Self::Exploring => "EXPLORING",
        }
    }

    /// Whether a camera of this type starts with world rotation inverted.
    #[must_use]
    pub const fn inverts_world_rotation(self) -> bool {
        matches!(self, Self::Exploring)
    }

    /// Sign applied to azimuth and elevation when composing or deriving.
    ///
    /// Tracking cameras always use the direct frame; the others flip unless
    /// world rotation is inverted.
    #[must_use]
    pub const fn angle_sign(self, world_inverted: bool) -> f64 {
        if matches!(self, Self::Tracking) || world_inverted {
            1.0
        } else {
            -1.0
        }
    }

    /// Build the camera matrix from the state's angles.
    ///
    /// The rotation is `Ry(az) · Rx(el) · Rz(roll)` with signed azimuth and
    /// elevation. Orbiting and exploring cameras sit `distance` units behind
    /// the focal point; tracking cameras are anchored at their position.
    #[must_use]
    pub fn compose_matrix(
        self,
        state: &TransformState,
        world_inverted: bool,
    ) -> DMat4 {
        let sign = self.angle_sign(world_inverted);
        let rotation = DMat4::from_quat(
            DQuat::from_rotation_y(sign * state.azimuth.to_radians())
                * DQuat::from_rotation_x(sign * state.elevation.to_radians())
                * DQuat::from_rotation_z(state.roll.to_radians()),
        );
        match self {
            Self::Orbiting | Self::Exploring => {
                DMat4::from_translation(state.focal_point)
                    * rotation
                    * DMat4::from_translation(DVec3::new(
                        0.0,
                        0.0,
                        state.distance,
                    ))
            }
            Self::Tracking => {
                DMat4::from_translation(state.position) * rotation
            }
        }
    }

    /// After the matrix changed, re-derive whichever end of the view ray is
    /// not authoritative for this type: the position for orbiting and
    /// exploring cameras, the focal point for tracking ones.
    pub fn derive_anchor(self, state: &mut TransformState) {
        match self {
            Self::Orbiting | Self::Exploring => {
                state.sync_position_from_matrix();
            }
            Self::Tracking => state.sync_focal_point_from_matrix(),
        }
    }
}

impl fmt::Display for CameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for CameraType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CameraType> for String {
    fn from(kind: CameraType) -> Self {
        kind.name().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posed(azimuth: f64, elevation: f64, roll: f64) -> TransformState {
        TransformState {
            azimuth,
            elevation,
            roll,
            distance: 10.0,
            focal_point: DVec3::new(1.0, 2.0, 3.0),
            position: DVec3::new(-4.0, 0.0, 2.0),
            ..TransformState::default()
        }
    }

    /// Compose, derive, then derive the angles back.
    fn round_trip(kind: CameraType, inverted: bool) -> TransformState {
        let mut s = posed(40.0, 25.0, 15.0);
        s.matrix = kind.compose_matrix(&s, inverted);
        s.sync_axes();
        kind.derive_anchor(&mut s);
        s.sync_angles(kind.angle_sign(inverted));
        s
    }

    #[test]
    fn parse_falls_back_to_exploring() {
        assert_eq!(CameraType::from_name("orbiting"), CameraType::Orbiting);
        assert_eq!(CameraType::from_name("TRACKING"), CameraType::Tracking);
        assert_eq!(CameraType::from_name("flying"), CameraType::Exploring);
    }

    #[test]
    fn only_exploring_inverts_world_rotation() {
        assert!(CameraType::Exploring.inverts_world_rotation());
        assert!(!CameraType::Orbiting.inverts_world_rotation());
        assert!(!CameraType::Tracking.inverts_world_rotation());
    }

    #[test]
    fn tracking_sign_ignores_inversion() {
        assert_eq!(CameraType::Tracking.angle_sign(false), 1.0);
        assert_eq!(CameraType::Orbiting.angle_sign(false), -1.0);
        assert_eq!(CameraType::Orbiting.angle_sign(true), 1.0);
    }

    #[test]
    fn orbiting_keeps_focal_point_and_distance() {
        let s = round_trip(CameraType::Orbiting, false);
        assert!((s.focal_point - DVec3::new(1.0, 2.0, 3.0)).length() < 1e-9);
        assert!((s.distance - 10.0).abs() < 1e-9);
        assert!((s.azimuth - 40.0).abs() < 1e-9);
        assert!((s.elevation - 25.0).abs() < 1e-9);
    }

    #[test]
    fn exploring_angles_round_trip_in_world_frame() {
        let s = round_trip(CameraType::Exploring, true);
        assert!((s.azimuth - 40.0).abs() < 1e-9);
        assert!((s.elevation - 25.0).abs() < 1e-9);
    }

    #[test]
    fn tracking_keeps_position_and_moves_focal_point() {
        let s = round_trip(CameraType::Tracking, false);
        assert!((s.position - DVec3::new(-4.0, 0.0, 2.0)).length() < 1e-9);
        assert!((s.distance - 10.0).abs() < 1e-9);
        assert!((s.azimuth - 40.0).abs() < 1e-9);
        assert!((s.elevation - 25.0).abs() < 1e-9);
    }

    #[test]
    fn composed_axes_are_orthonormal() {
        let s = round_trip(CameraType::Orbiting, false);
        assert!(s.right.dot(s.up).abs() < 1e-12);
        assert!(s.up.dot(s.forward).abs() < 1e-12);
        assert!((s.forward.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn serde_uses_upper_case_names() {
        let json = serde_json::to_string(&CameraType::Orbiting).unwrap();
        assert_eq!(json, "\"ORBITING\"");
        let parsed: CameraType = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(parsed, CameraType::Exploring);
        let mode: TrackingMode =
            serde_json::from_str("\"CINEMATIC\"").unwrap();
        assert_eq!(mode, TrackingMode::Cinematic);
    }
}
