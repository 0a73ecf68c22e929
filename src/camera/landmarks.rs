//! Landmark bookkeeping and playback on a camera.

use std::time::Duration;

use glam::DVec3;
use log::{debug, info, warn};

use super::animator::{
    AnimationStatus, CancellationToken, LandmarkHop, LandmarkSequence,
    LandmarkTransition, SequenceStep, TransitionState,
};
use super::core::Camera;
use super::landmark::Landmark;

impl Camera {
    /// Save the current pose as a landmark.
    ///
    /// Names may repeat; lookups return the most recent one.
    pub fn set_landmark(&mut self, name: &str) {
        let landmark = Landmark::new(name, self);
        self.landmarks.push(landmark);
        debug!("{} saved landmark '{name}'", self.id);
    }

    /// Save a landmark for a pose the camera is not in.
    ///
    /// The pose is built on a scratch camera of the same type, so it gets
    /// the same derived fields as if the camera had been moved there.
    pub fn create_landmark(
        &mut self,
        name: &str,
        position: DVec3,
        focal_point: DVec3,
        roll: Option<f64>,
    ) {
        let mut scratch = Camera::new(self.kind);
        scratch.set_position(position);
        scratch.set_focal_point(focal_point);
        if let Some(roll) = roll {
            scratch.set_roll(roll);
        }
        self.landmarks.push(Landmark::new(name, &scratch));
        debug!("{} created landmark '{name}'", self.id);
    }

    /// Most recent landmark called `name`.
    #[must_use]
    pub fn landmark(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.iter().rev().find(|l| l.name() == name)
    }

    /// All landmarks in insertion order.
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Landmark names, most recent first.
    #[must_use]
    pub fn landmark_names(&self) -> Vec<&str> {
        self.landmarks.iter().rev().map(Landmark::name).collect()
    }

    /// Move to a landmark, immediately or over `duration`.
    ///
    /// Any transition in flight is replaced. `fps` defaults to the
    /// camera's configured rate. Returns `false` (and logs a warning) when
    /// no landmark has that name.
    pub fn goto_landmark(
        &mut self,
        name: &str,
        duration: Option<Duration>,
        fps: Option<f64>,
    ) -> bool {
        let Some(landmark) = self.landmark(name).cloned() else {
            warn!("{}: landmark '{name}' does not exist", self.id);
            return false;
        };
        match duration {
            Some(duration) if !duration.is_zero() => {
                let transition = LandmarkTransition::new(
                    &landmark,
                    duration,
                    fps.unwrap_or(self.animation.default_fps),
                    self.animation.easing,
                    self.animation.arrival_tolerance,
                );
                debug!(
                    "{} heading to '{name}' in {} steps",
                    self.id,
                    transition.steps()
                );
                self.transition = Some(transition);
            }
            _ => {
                self.transition = None;
                landmark.retrieve(self);
            }
        }
        true
    }

    /// Play `hops` back to back.
    ///
    /// Cancels any transition or sequence in flight and starts the first
    /// hop right away. The returned token stops the sequence at its next
    /// hop boundary.
    pub fn do_landmark_animation(
        &mut self,
        hops: Vec<LandmarkHop>,
    ) -> CancellationToken {
        self.transition = None;
        let sequence = LandmarkSequence::new(hops);
        let token = sequence.token();
        self.sequence = Some(sequence);
        self.advance_sequence(Duration::ZERO);
        token
    }

    /// Stop the running landmark sequence before its next hop.
    pub fn stop_landmark_animation(&self) {
        if let Some(sequence) = &self.sequence {
            sequence.token().cancel();
        }
    }

    /// Whether a transition or sequence is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || self.sequence.is_some()
    }

    /// Advance landmark playback by `dt`.
    pub fn tick(&mut self, dt: Duration) -> AnimationStatus {
        if let Some(mut transition) = self.transition.take() {
            match transition.advance(self, dt) {
                TransitionState::Running => self.transition = Some(transition),
                TransitionState::Arrived => {
                    debug!(
                        "{} arrived after {} steps",
                        self.id,
                        transition.completed_steps()
                    );
                }
            }
        }
        self.advance_sequence(dt);
        if self.is_animating() {
            AnimationStatus::Running
        } else {
            AnimationStatus::Idle
        }
    }

    fn advance_sequence(&mut self, mut dt: Duration) {
        let Some(mut sequence) = self.sequence.take() else {
            return;
        };
        loop {
            match sequence.poll(dt) {
                SequenceStep::Wait => {
                    self.sequence = Some(sequence);
                    return;
                }
                SequenceStep::Start(hop) => {
                    let _ = self.goto_landmark(
                        &hop.name,
                        Some(hop.duration),
                        hop.fps,
                    );
                    dt = Duration::ZERO;
                }
                SequenceStep::Stopped => {
                    info!("{}: landmark animation stopped", self.id);
                    return;
                }
                SequenceStep::Finished => return,
            }
        }
    }
}
