//! Pose setters and relative motion: angles, rotate, dolly, pan and shots.

use glam::{DMat4, DQuat, DVec3};
use log::warn;

use super::core::Camera;
use super::kind::{CameraType, TrackingMode};
use super::transform::{look_at_frame, wrap_angle, MIN_DISTANCE};
use crate::scene::{BoundingBox, Scene};

/// Distance factor used when framing a bounding box.
const SHOT_MARGIN: f64 = 1.5;

impl Camera {
    // -- Position and focal point --

    /// Move the camera, keeping its focal point, and re-aim at it.
    pub fn set_position(&mut self, position: DVec3) {
        self.state.place(position);
        self.set_focal_point(self.state.focal_point);
    }

    /// Aim the camera at `focal_point` without moving it.
    ///
    /// The up hint is world +Y, except for cinematic tracking where it banks
    /// with the direction towards the focal point.
    pub fn set_focal_point(&mut self, focal_point: DVec3) {
        self.state.focal_point = focal_point;
        let up = if self.tracking_mode == TrackingMode::Cinematic {
            cinematic_up(focal_point - self.state.position)
        } else {
            DVec3::Y
        };
        self.state.matrix = look_at_frame(
            self.state.position,
            focal_point,
            up,
            &self.state.matrix,
        );
        self.state.sync_axes();
        self.state.sync_distance();
        self.sync_angles();
    }

    /// Move along the forward axis until `distance` from the focal point.
    ///
    /// Negative values and the current distance are ignored. Values below
    /// [`MIN_DISTANCE`] are clamped to it.
    pub fn set_distance(&mut self, distance: f64) {
        if distance.is_nan()
            || distance < 0.0
            || distance == self.state.distance
        {
            return;
        }
        let distance = if distance < MIN_DISTANCE {
            warn!("distance {distance} too small, clamping to {MIN_DISTANCE}");
            MIN_DISTANCE
        } else {
            distance
        };
        self.state.distance = distance;
        self.state.dollying_step = distance / 100.0;
        let position = self.state.focal_point + self.state.forward * distance;
        self.state.place(position);
        self.state.distance_vector = self.state.focal_point - position;
    }

    // -- Absolute angles --

    /// Set the azimuth in degrees.
    pub fn set_azimuth(&mut self, azimuth: f64) {
        self.state.azimuth = wrap_angle(azimuth);
        self.recompose();
    }

    /// Set the elevation in degrees.
    pub fn set_elevation(&mut self, elevation: f64) {
        self.state.elevation = wrap_angle(elevation);
        self.recompose();
    }

    /// Set the roll in degrees.
    pub fn set_roll(&mut self, roll: f64) {
        self.state.roll = wrap_angle(roll);
        self.recompose();
    }

    /// Add `delta` degrees to the azimuth.
    pub fn change_azimuth(&mut self, delta: f64) {
        self.set_azimuth(self.state.azimuth + delta);
    }

    /// Add `delta` degrees to the elevation.
    pub fn change_elevation(&mut self, delta: f64) {
        self.set_elevation(self.state.elevation + delta);
    }

    /// Add `delta` degrees to the roll.
    pub fn change_roll(&mut self, delta: f64) {
        self.set_roll(self.state.roll + delta);
    }

    // -- Relative motion --

    /// Rotate by relative angles in degrees.
    ///
    /// Exploring cameras rotate in their own frame about the focal point.
    /// The other types accumulate the angles and recompose; a rotation that
    /// would push the elevation beyond ±90° is ignored entirely.
    pub fn rotate(&mut self, azimuth: f64, elevation: f64, roll: f64) {
        let sign = self.angle_sign();
        if self.kind == CameraType::Exploring {
            let rotation = DMat4::from_quat(
                DQuat::from_rotation_y(sign * wrap_angle(azimuth).to_radians())
                    * DQuat::from_rotation_x(
                        sign * wrap_angle(elevation).to_radians(),
                    )
                    * DQuat::from_rotation_z(wrap_angle(roll).to_radians()),
            );
            let offset = DVec3::new(0.0, 0.0, self.state.distance);
            self.state.matrix = self.state.matrix
                * DMat4::from_translation(-offset)
                * rotation
                * DMat4::from_translation(offset);
        } else {
            if (self.state.elevation + elevation).abs() > 90.0 {
                return;
            }
            let s = &mut self.state;
            s.rel_azimuth = wrap_angle(azimuth);
            s.rel_elevation = wrap_angle(elevation);
            s.rel_roll = wrap_angle(roll);
            s.azimuth = wrap_angle(s.azimuth + s.rel_azimuth);
            s.elevation = wrap_angle(s.elevation + s.rel_elevation);
            s.roll = wrap_angle(s.roll + s.rel_roll);
            self.state.matrix = self
                .kind
                .compose_matrix(&self.state, self.world_rotation_inverted);
        }
        self.state.sync_axes();
        self.kind.derive_anchor(&mut self.state);
        self.state.sync_angles(sign);
    }

    /// Move along the forward axis by `value` dolly steps.
    ///
    /// Positive values move away from the focal point. Tracking cameras
    /// carry their focal point along.
    pub fn dolly(&mut self, value: f64) {
        let position = self.state.position
            + self.state.forward * (value * self.state.dollying_step);
        self.state.place(position);
        match self.kind {
            CameraType::Orbiting | CameraType::Exploring => {
                self.state.sync_distance();
            }
            CameraType::Tracking => {
                self.state.focal_point = position + self.state.distance_vector;
            }
        }
    }

    /// Shift the camera in its own right/up plane.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let position =
            self.state.position + self.state.right * dx + self.state.up * dy;
        self.set_position(position);
    }

    /// Shift the camera by a world-space offset.
    pub fn translate(&mut self, offset: DVec3) {
        self.set_position(self.state.position + offset);
    }

    // -- Framing --

    /// Frame a bounding box head-on from +Z.
    ///
    /// Angles are reset, then the camera backs off far enough for the
    /// larger of the box's x/y extents to fit the field of view. A box with
    /// no x/y extent only re-aims the camera at its center.
    pub fn shot(&mut self, bounds: &BoundingBox) {
        self.set_elevation(0.0);
        self.set_azimuth(0.0);
        self.set_roll(0.0);

        let size = bounds.size();
        let max_dim = size.x.max(size.y);
        let center = (bounds.center() * 1000.0).round() / 1000.0;
        if max_dim != 0.0 {
            let distance = SHOT_MARGIN * max_dim
                / self.projection.fov.to_radians().tan();
            self.set_position(center + DVec3::new(0.0, 0.0, distance));
        }
        self.set_focal_point(center);
        self.refresh();
    }

    /// Frame the whole scene.
    pub fn long_shot(&mut self, scene: &mut Scene) {
        let bounds = scene.compute_bounding_box();
        self.shot(&bounds);
    }
}

/// Up vector that banks with the direction `d` towards the focal point.
fn cinematic_up(d: DVec3) -> DVec3 {
    let r = d.length();
    if r == 0.0 {
        return DVec3::Y;
    }
    let azimuth = 90f64.to_radians() + d.z.atan2(d.x);
    let elevation = (d.y / r).clamp(-1.0, 1.0).asin();
    (DQuat::from_rotation_y(azimuth) * DQuat::from_rotation_x(elevation))
        * DVec3::Y
}
