//! Time-driven landmark animation.
//!
//! Nothing here owns a timer. The host calls
//! [`Camera::tick`](super::Camera::tick) (or
//! [`CameraManager::tick`](super::CameraManager::tick)) with the elapsed
//! frame time, and the transition converts it into discrete interpolation
//! steps through an accumulator.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use glam::DVec3;

use super::core::Camera;
use super::landmark::Landmark;
use crate::util::easing::EasingFunction;

/// Milliseconds per "step unit" when converting a duration to steps.
const MS_PER_STEP_UNIT: f64 = 100.0;
/// Frame rate at which one step unit maps to exactly one step.
const REFERENCE_FPS: f64 = 10.0;

/// Whether anything is still animating after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Nothing in flight.
    Idle,
    /// A transition or sequence is still running.
    Running,
}

/// Shared stop flag for a landmark sequence.
///
/// Cancelling takes effect at the next hop boundary; the hop already in
/// flight finishes.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Create an un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ---------------------------------------------------------------------------
// Single transition
// ---------------------------------------------------------------------------

/// Outcome of advancing a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// More steps remain.
    Running,
    /// The camera sits exactly on the destination.
    Arrived,
}

/// Stepwise interpolation from the camera's current pose to a landmark.
///
/// Every step blends from wherever the camera is *now* towards the target,
/// so external motion during a transition is absorbed rather than fought.
#[derive(Debug, Clone)]
pub struct LandmarkTransition {
    target_position: DVec3,
    target_focal_point: DVec3,
    target_roll: f64,
    steps: u32,
    count: u32,
    step_interval: Duration,
    accumulator: Duration,
    easing: EasingFunction,
    tolerance: f64,
}

impl LandmarkTransition {
    /// Plan a transition to `landmark` lasting `duration` at `fps`.
    ///
    /// The step count is `round(ms / 100 · fps / 10)`, at least one.
    #[must_use]
    pub fn new(
        landmark: &Landmark,
        duration: Duration,
        fps: f64,
        easing: EasingFunction,
        tolerance: f64,
    ) -> Self {
        let steps = step_count(duration, fps);
        Self {
            target_position: landmark.position(),
            target_focal_point: landmark.focal_point(),
            target_roll: landmark.roll(),
            steps,
            count: 0,
            step_interval: duration / steps,
            accumulator: Duration::ZERO,
            easing,
            tolerance,
        }
    }

    /// Total number of interpolation steps.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Steps taken so far.
    #[must_use]
    pub fn completed_steps(&self) -> u32 {
        self.count
    }

    /// Time between two steps.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Feed elapsed time, running as many steps as it covers.
    pub fn advance(
        &mut self,
        camera: &mut Camera,
        dt: Duration,
    ) -> TransitionState {
        self.accumulator += dt;
        while self.accumulator >= self.step_interval {
            self.accumulator -= self.step_interval;
            if self.step(camera) == TransitionState::Arrived {
                return TransitionState::Arrived;
            }
        }
        TransitionState::Running
    }

    /// Run one interpolation step.
    pub fn step(&mut self, camera: &mut Camera) -> TransitionState {
        self.count += 1;
        let t = (f64::from(self.count) / f64::from(self.steps)).min(1.0);
        let k = self.easing.evaluate(t);

        let focal_point =
            camera.focal_point().lerp(self.target_focal_point, k);
        let position = camera.position().lerp(self.target_position, k);
        let roll = camera.roll() * (1.0 - k) + self.target_roll * k;

        camera.set_focal_point(focal_point);
        camera.set_position(position);
        camera.set_roll(roll);
        camera.refresh();

        let remaining = focal_point.distance(self.target_focal_point)
            + position.distance(self.target_position);
        if remaining > self.tolerance && self.count < self.steps {
            TransitionState::Running
        } else {
            self.finish(camera);
            TransitionState::Arrived
        }
    }

    /// Snap the camera onto the destination.
    pub fn finish(&self, camera: &mut Camera) {
        camera.set_focal_point(self.target_focal_point);
        camera.set_position(self.target_position);
        camera.set_roll(self.target_roll);
        camera.refresh();
    }
}

fn step_count(duration: Duration, fps: f64) -> u32 {
    let ms = duration.as_secs_f64() * 1000.0;
    let steps = (ms / MS_PER_STEP_UNIT * fps / REFERENCE_FPS).round();
    if steps.is_nan() || steps < 1.0 {
        return 1;
    }
    steps.min(f64::from(u32::MAX)) as u32
}

// ---------------------------------------------------------------------------
// Multi-hop sequence
// ---------------------------------------------------------------------------

/// One hop of a landmark animation.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkHop {
    /// Landmark to visit.
    pub name: String,
    /// Time allotted to this hop.
    pub duration: Duration,
    /// Step rate; `None` uses the camera's default.
    pub fps: Option<f64>,
}

impl LandmarkHop {
    /// Hop to `name` over `duration_ms` milliseconds at `fps`.
    #[must_use]
    pub fn new(name: &str, duration_ms: u64, fps: f64) -> Self {
        Self {
            name: name.to_owned(),
            duration: Duration::from_millis(duration_ms),
            fps: Some(fps),
        }
    }
}

/// What a sequence wants the camera to do after a tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceStep {
    /// The current hop's time has not elapsed.
    Wait,
    /// Start this hop now.
    Start(LandmarkHop),
    /// The token was cancelled before the next hop.
    Stopped,
    /// Every hop has been started and the last one's time is up.
    Finished,
}

/// Ordered hops played back to back.
///
/// Each hop starts once the previous hop's duration has elapsed,
/// replacing any transition still in flight.
#[derive(Debug, Clone)]
pub struct LandmarkSequence {
    hops: VecDeque<LandmarkHop>,
    hop_remaining: Duration,
    token: CancellationToken,
}

impl LandmarkSequence {
    /// Queue `hops` for playback.
    #[must_use]
    pub fn new(hops: Vec<LandmarkHop>) -> Self {
        Self {
            hops: hops.into(),
            hop_remaining: Duration::ZERO,
            token: CancellationToken::new(),
        }
    }

    /// Handle that stops this sequence.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Hops not yet started.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.hops.len()
    }

    /// Consume `dt` and report the next action.
    ///
    /// Call again with `Duration::ZERO` after a [`SequenceStep::Start`]:
    /// zero-length hops chain within the same tick.
    pub fn poll(&mut self, dt: Duration) -> SequenceStep {
        self.hop_remaining = self.hop_remaining.saturating_sub(dt);
        if !self.hop_remaining.is_zero() {
            return SequenceStep::Wait;
        }
        if self.token.is_cancelled() {
            return SequenceStep::Stopped;
        }
        match self.hops.pop_front() {
            Some(hop) => {
                self.hop_remaining = hop.duration;
                SequenceStep::Start(hop)
            }
            None => SequenceStep::Finished,
        }
    }
}
