//! Frame timing for host-driven animation ticks.

use web_time::{Duration, Instant};

/// Measures wall-clock time between host frames so landmark animations can
/// be driven with [`CameraManager::tick`](crate::camera::CameraManager::tick).
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single delta (long stalls are not replayed)
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f64,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

impl FrameClock {
    /// Create a clock that never reports a delta longer than `max_delta`.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Time elapsed since the previous call (or since construction).
    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f64();
        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + (1.0 / frame_time) * self.smoothing;
        }
        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_capped() {
        let mut clock = FrameClock::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.delta(), Duration::ZERO);
    }

    #[test]
    fn delta_measures_elapsed_time() {
        let mut clock = FrameClock::default();
        std::thread::sleep(Duration::from_millis(5));
        let delta = clock.delta();
        assert!(delta >= Duration::from_millis(5));
        assert!(clock.fps() > 0.0);
    }
}
