use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{DMat4, DVec3};
use log::{debug, info};

use super::animator::{LandmarkSequence, LandmarkTransition};
use super::kind::{CameraType, TrackingMode};
use super::landmark::Landmark;
use super::transform::TransformState;
use crate::error::LookoutError;
use crate::options::{AnimationOptions, Options};
use crate::scene::ActorId;

static NEXT_CAMERA_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique camera identifier.
///
/// Actors store these to know which cameras follow them, so ids are never
/// reused, even after the camera is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(u64);

impl CameraId {
    fn next() -> Self {
        Self(NEXT_CAMERA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for CameraId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "camera#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Near clipping plane distance.
    pub near: f64,
    /// Far clipping plane distance.
    pub far: f64,
    /// Fixed aspect ratio. `None` follows the viewport.
    pub aspect: Option<f64>,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov: 30.0,
            near: 0.1,
            far: 10_000.0,
            aspect: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// A viewpoint into the scene.
///
/// The pose is held in a [`TransformState`] whose fields are kept mutually
/// consistent after every public operation. Navigation, tracking and
/// landmark operations live in sibling modules as further `impl` blocks.
///
/// A clone is a separate camera with a fresh [`CameraId`]. It keeps the
/// pose, projection and landmarks, but follows no actor and has no
/// animation in flight.
#[derive(Debug)]
pub struct Camera {
    pub(super) id: CameraId,
    pub(super) kind: CameraType,
    pub(super) tracking_mode: TrackingMode,
    pub(super) world_rotation_inverted: bool,
    pub(super) state: TransformState,
    pub(super) projection: Projection,
    pub(super) viewport: (u32, u32),
    /// Actor this camera follows, if any.
    pub(super) following: Option<ActorId>,
    /// Landmarks in insertion order; lookups scan from the back.
    pub(super) landmarks: Vec<Landmark>,
    pub(super) animation: AnimationOptions,
    /// In-flight interpolation towards a landmark.
    pub(super) transition: Option<LandmarkTransition>,
    /// In-flight multi-hop landmark animation.
    pub(super) sequence: Option<LandmarkSequence>,
    pub(super) redraw_requested: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraType::default())
    }
}

impl Clone for Camera {
    fn clone(&self) -> Self {
        Self {
            id: CameraId::next(),
            kind: self.kind,
            tracking_mode: self.tracking_mode,
            world_rotation_inverted: self.world_rotation_inverted,
            state: self.state,
            projection: self.projection,
            viewport: self.viewport,
            following: None,
            landmarks: self.landmarks.clone(),
            animation: self.animation.clone(),
            transition: None,
            sequence: None,
            redraw_requested: false,
        }
    }
}

impl Camera {
    /// Create a camera one unit along +Z looking at the origin.
    #[must_use]
    pub fn new(kind: CameraType) -> Self {
        let mut camera = Self {
            id: CameraId::next(),
            kind,
            tracking_mode: TrackingMode::Default,
            world_rotation_inverted: kind.inverts_world_rotation(),
            state: TransformState::default(),
            projection: Projection::default(),
            viewport: (1, 1),
            following: None,
            landmarks: Vec::new(),
            animation: AnimationOptions::default(),
            transition: None,
            sequence: None,
            redraw_requested: false,
        };
        camera.sync_angles();
        camera
    }

    /// Create a camera from options: type, projection, initial pose and
    /// animation defaults.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        let opts = &options.camera;
        let mut camera = Self::new(opts.camera_type);
        camera.projection = Projection {
            fov: opts.fov,
            near: opts.near,
            far: opts.far,
            aspect: opts.aspect,
        };
        camera.animation = options.animation.clone();
        camera.set_focal_point(DVec3::from_array(opts.focal_point));
        camera.set_position(DVec3::from_array(opts.position));
        camera
    }

    // -- Type and mode --

    /// Change the camera type.
    ///
    /// World rotation is reset to the type's default and the angles are
    /// re-derived. `tracking_mode` is only applied when switching to
    /// [`CameraType::Tracking`].
    pub fn set_type(
        &mut self,
        kind: CameraType,
        tracking_mode: Option<TrackingMode>,
    ) {
        self.kind = kind;
        self.world_rotation_inverted = kind.inverts_world_rotation();
        self.sync_angles();
        if kind == CameraType::Tracking {
            if let Some(mode) = tracking_mode {
                self.tracking_mode = mode;
            }
        }
        debug!("{} is now {kind}", self.id);
    }

    /// Set how a tracking camera reacts to its actor moving.
    ///
    /// # Errors
    ///
    /// [`LookoutError::NotTrackingCamera`] if the camera is not of tracking
    /// type; the mode is left unchanged.
    pub fn set_tracking_mode(
        &mut self,
        mode: TrackingMode,
    ) -> Result<(), LookoutError> {
        if self.kind != CameraType::Tracking {
            return Err(LookoutError::NotTrackingCamera(self.kind));
        }
        self.tracking_mode = mode;
        Ok(())
    }

    /// Flip between the camera frame and the world frame for angles.
    pub fn set_world_rotation(&mut self, inverted: bool) {
        self.world_rotation_inverted = inverted;
        self.sync_angles();
    }

    // -- Getters --

    /// Camera id.
    #[must_use]
    pub fn id(&self) -> CameraId {
        self.id
    }

    /// Camera type.
    #[must_use]
    pub fn camera_type(&self) -> CameraType {
        self.kind
    }

    /// Tracking mode (only meaningful for tracking cameras).
    #[must_use]
    pub fn tracking_mode(&self) -> TrackingMode {
        self.tracking_mode
    }

    /// Whether angles are measured in the world frame.
    #[must_use]
    pub fn world_rotation_inverted(&self) -> bool {
        self.world_rotation_inverted
    }

    /// The full pose.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Camera-to-world matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        self.state.matrix
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> DVec3 {
        self.state.position
    }

    /// Point the camera looks at.
    #[must_use]
    pub fn focal_point(&self) -> DVec3 {
        self.state.focal_point
    }

    /// Unit right axis.
    #[must_use]
    pub fn right(&self) -> DVec3 {
        self.state.right
    }

    /// Unit up axis.
    #[must_use]
    pub fn up(&self) -> DVec3 {
        self.state.up
    }

    /// Unit forward axis, pointing from the focal point to the camera.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        self.state.forward
    }

    /// Azimuth in degrees.
    #[must_use]
    pub fn azimuth(&self) -> f64 {
        self.state.azimuth
    }

    /// Elevation in degrees.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.state.elevation
    }

    /// Roll in degrees.
    #[must_use]
    pub fn roll(&self) -> f64 {
        self.state.roll
    }

    /// Distance between position and focal point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.state.distance
    }

    /// Dolly unit (one hundredth of the distance).
    #[must_use]
    pub fn dollying_step(&self) -> f64 {
        self.state.dollying_step
    }

    /// Actor this camera follows.
    #[must_use]
    pub fn following(&self) -> Option<ActorId> {
        self.following
    }

    // -- Matrices --

    /// World-to-camera matrix: the inverse of [`matrix`](Self::matrix).
    #[must_use]
    pub fn view_transform(&self) -> DMat4 {
        self.state.matrix.inverse()
    }

    /// Replace the camera matrix and re-derive axes, position, distance and
    /// angles from it. The focal point is kept.
    pub fn set_matrix(&mut self, matrix: DMat4) {
        self.state.matrix = matrix;
        self.state.sync_from_matrix(self.angle_sign());
    }

    /// Projection parameters.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn field_of_view(&self) -> f64 {
        self.projection.fov
    }

    /// Set the vertical field of view in degrees.
    pub fn set_field_of_view(&mut self, fov: f64) {
        self.projection.fov = fov;
    }

    /// Fix the aspect ratio, or pass `None` to follow the viewport.
    pub fn set_aspect_ratio(&mut self, aspect: Option<f64>) {
        self.projection.aspect = aspect;
    }

    /// Set every projection parameter at once.
    pub fn set_perspective(
        &mut self,
        near: f64,
        far: f64,
        fov: f64,
        aspect: Option<f64>,
    ) {
        self.projection = Projection {
            fov,
            near,
            far,
            aspect,
        };
    }

    /// Record the viewport size used for the default aspect ratio.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Effective aspect ratio: the fixed one, else viewport width / height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.projection.aspect.unwrap_or_else(|| {
            let (w, h) = self.viewport;
            if h == 0 {
                1.0
            } else {
                f64::from(w) / f64::from(h)
            }
        })
    }

    /// Right-handed perspective matrix with a [0, 1] depth range.
    #[must_use]
    pub fn perspective_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.projection.fov.to_radians(),
            self.aspect_ratio(),
            self.projection.near,
            self.projection.far,
        )
    }

    /// Projection times view.
    #[must_use]
    pub fn view_projection(&self) -> DMat4 {
        self.perspective_matrix() * self.view_transform()
    }

    // -- Redraw --

    /// Ask the host to re-render.
    pub fn refresh(&mut self) {
        self.redraw_requested = true;
    }

    /// Consume a pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Log the full camera state at info level.
    pub fn status(&self) {
        let s = &self.state;
        info!("{} [{}]", self.id, self.kind);
        info!("  position:    {:?}", s.position.to_array());
        info!("  focal point: {:?}", s.focal_point.to_array());
        info!(
            "  axes:        right {:?} up {:?} forward {:?}",
            s.right.to_array(),
            s.up.to_array(),
            s.forward.to_array()
        );
        info!(
            "  angles:      azimuth {:.3} elevation {:.3} roll {:.3}",
            s.azimuth, s.elevation, s.roll
        );
        info!(
            "  distance:    {:.4} (step {:.6})",
            s.distance, s.dollying_step
        );
        info!(
            "  projection:  fov {} near {} far {} aspect {:.3}",
            self.projection.fov,
            self.projection.near,
            self.projection.far,
            self.aspect_ratio()
        );
        if self.kind == CameraType::Tracking {
            info!("  tracking:    {:?}", self.tracking_mode);
        }
    }

    // -- Internal helpers shared by the sibling impl blocks --

    /// Sign for azimuth/elevation under the current type and frame.
    pub(super) fn angle_sign(&self) -> f64 {
        self.kind.angle_sign(self.world_rotation_inverted)
    }

    pub(super) fn sync_angles(&mut self) {
        self.state.sync_angles(self.angle_sign());
    }

    /// Rebuild the matrix from the stored angles, then re-derive the axes
    /// and the type's dependent anchor.
    pub(super) fn recompose(&mut self) {
        self.state.matrix =
            self.kind.compose_matrix(&self.state, self.world_rotation_inverted);
        self.state.sync_axes();
        self.kind.derive_anchor(&mut self.state);
    }
}
