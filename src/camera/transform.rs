//! Camera pose as a plain value, plus the derivations that keep its
//! redundant representations in agreement.
//!
//! The matrix is the camera-to-world transform: its first three columns are
//! the right, up and forward axes, its last column the position. `forward`
//! points from the focal point towards the camera.

use glam::{DMat3, DMat4, DVec3, DVec4};

/// Smallest distance a camera may keep from its focal point.
pub const MIN_DISTANCE: f64 = 0.0002;

/// Complete pose of a camera.
///
/// Copying a `TransformState` never aliases: every field is a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Camera-to-world matrix.
    pub matrix: DMat4,
    /// Unit right axis (matrix column 0).
    pub right: DVec3,
    /// Unit up axis (matrix column 1).
    pub up: DVec3,
    /// Unit forward axis (matrix column 2), pointing away from the focal
    /// point.
    pub forward: DVec3,
    /// Camera position (matrix column 3).
    pub position: DVec3,
    /// Point the camera looks at.
    pub focal_point: DVec3,
    /// `focal_point - position`.
    pub distance_vector: DVec3,
    /// Horizontal bearing in degrees.
    pub azimuth: f64,
    /// Vertical tilt in degrees.
    pub elevation: f64,
    /// Rotation about the view axis in degrees.
    pub roll: f64,
    /// Last relative azimuth applied by `rotate`.
    pub rel_azimuth: f64,
    /// Last relative elevation applied by `rotate`.
    pub rel_elevation: f64,
    /// Last relative roll applied by `rotate`.
    pub rel_roll: f64,
    /// `|focal_point - position|`.
    pub distance: f64,
    /// Dolly unit: one hundredth of the distance.
    pub dollying_step: f64,
}

impl Default for TransformState {
    /// One unit along +Z, looking at the origin.
    fn default() -> Self {
        let position = DVec3::Z;
        let mut state = Self {
            matrix: DMat4::from_translation(position),
            right: DVec3::X,
            up: DVec3::Y,
            forward: DVec3::Z,
            position,
            focal_point: DVec3::ZERO,
            distance_vector: DVec3::ZERO,
            azimuth: 0.0,
            elevation: 0.0,
            roll: 0.0,
            rel_azimuth: 0.0,
            rel_elevation: 0.0,
            rel_roll: 0.0,
            distance: 0.0,
            dollying_step: 0.0,
        };
        state.sync_distance();
        state
    }
}

impl TransformState {
    /// Re-read the unit axes from the matrix basis columns.
    pub fn sync_axes(&mut self) {
        self.right = self.matrix.x_axis.truncate().normalize_or_zero();
        self.up = self.matrix.y_axis.truncate().normalize_or_zero();
        self.forward = self.matrix.z_axis.truncate().normalize_or_zero();
    }

    /// Re-read the position from the matrix translation, then the distance.
    pub fn sync_position_from_matrix(&mut self) {
        self.position = self.matrix.w_axis.truncate();
        self.sync_distance();
    }

    /// Place the focal point `distance` units in front of the camera
    /// (along `-forward`), then refresh the distance.
    pub fn sync_focal_point_from_matrix(&mut self) {
        self.distance_vector = DMat3::from_mat4(self.matrix)
            * DVec3::new(0.0, 0.0, -self.distance);
        self.focal_point = self.position + self.distance_vector;
        self.sync_distance();
    }

    /// Recompute the distance vector, distance and dolly step.
    pub fn sync_distance(&mut self) {
        self.distance_vector = self.focal_point - self.position;
        self.distance = self.distance_vector.length();
        self.dollying_step = self.distance / 100.0;
    }

    /// Recompute azimuth and elevation from the distance vector.
    ///
    /// `sign` is `1.0` when angles are measured in the inverted (world)
    /// frame and `-1.0` otherwise. Roll is left alone. A zero-length
    /// distance vector yields zero angles.
    pub fn sync_angles(&mut self, sign: f64) {
        let d = self.distance_vector;
        let r = d.length();
        if r == 0.0 {
            self.elevation = 0.0;
            self.azimuth = 0.0;
            return;
        }
        self.elevation = sign * (d.y / r).clamp(-1.0, 1.0).asin().to_degrees();
        self.azimuth = sign * (-d.x).atan2(-d.z).to_degrees();
    }

    /// Move the camera without touching its orientation or focal point.
    ///
    /// The distance fields go stale; callers re-derive them.
    pub fn place(&mut self, position: DVec3) {
        self.position = position;
        self.matrix.w_axis = position.extend(1.0);
    }

    /// Re-derive every field from the matrix alone (focal point kept).
    pub fn sync_from_matrix(&mut self, sign: f64) {
        self.sync_axes();
        self.sync_position_from_matrix();
        self.sync_angles(sign);
    }
}

/// Normalize an angle in degrees: non-finite → 0, beyond ±360 → `a % 360`.
#[must_use]
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        0.0
    } else if !(-360.0..=360.0).contains(&angle) {
        angle % 360.0
    } else {
        angle
    }
}

/// Camera-to-world matrix for a camera at `eye` looking at `target`.
///
/// Equivalent to the inverse of a right-handed look-at view matrix. When
/// `eye == target` the orientation of `previous` is kept; when `up` is
/// parallel to the view direction the right axis of `previous` stands in.
#[must_use]
pub fn look_at_frame(
    eye: DVec3,
    target: DVec3,
    up: DVec3,
    previous: &DMat4,
) -> DMat4 {
    let back = eye - target;
    if back.length_squared() <= f64::EPSILON * f64::EPSILON {
        let mut m = *previous;
        m.w_axis = eye.extend(1.0);
        return m;
    }
    let z = back.normalize();

    let mut x = up.cross(z);
    if x.length_squared() <= f64::EPSILON {
        let prev_right = previous.x_axis.truncate();
        x = prev_right - z * prev_right.dot(z);
        if x.length_squared() <= f64::EPSILON {
            x = z.any_orthonormal_vector();
        }
    }
    let x = x.normalize();
    let y = z.cross(x);

    DMat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        DVec4::new(eye.x, eye.y, eye.z, 1.0),
    )
}
