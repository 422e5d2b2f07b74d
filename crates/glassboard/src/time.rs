use std::time::{Duration, Instant};

use glassboard_core::profiling::profile_function;

/// Frame clock for the dashboard loop.
///
/// Produces the `dt` handed to [`Dashboard::frame`](glassboard_ui::Dashboard::frame).
/// Long hitches are capped at `max_delta` so a stalled app does not skip
/// straight to the end of every animation when it resumes.
///
/// # Example
/// ```
/// use std::time::{Duration, Instant};
/// use glassboard::FrameTime;
///
/// let start = Instant::now();
/// let mut time = FrameTime::starting_at(start);
/// time.update_at(start + Duration::from_millis(16));
/// assert_eq!(time.delta(), Duration::from_millis(16));
/// ```
#[derive(Debug, Clone)]
pub struct FrameTime {
    /// Total time elapsed since the clock started
    elapsed: Duration,
    /// Time elapsed since last frame, after capping
    delta: Duration,
    frame_count: u64,
    /// Multiplier applied by [`scaled_delta`](Self::scaled_delta)
    time_scale: f32,
    max_delta: Duration,
    start_time: Instant,
    last_frame_time: Instant,
}

impl FrameTime {
    /// A clock starting now with a 100ms delta cap.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            elapsed: Duration::ZERO,
            delta: Duration::ZERO,
            frame_count: 0,
            time_scale: 1.0,
            max_delta: Duration::from_millis(100),
            start_time: now,
            last_frame_time: now,
        }
    }

    /// Advance to the current instant. Call once per frame.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advance to `now`.
    pub fn update_at(&mut self, now: Instant) {
        profile_function!();
        let raw_delta = now.saturating_duration_since(self.last_frame_time);
        if raw_delta > self.max_delta {
            tracing::debug!(?raw_delta, cap = ?self.max_delta, "frame delta capped");
        }

        self.delta = raw_delta.min(self.max_delta);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_frame_time = now;
        self.frame_count += 1;
    }

    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// The delta with the time scale applied; feed this to animations.
    pub fn scaled_delta(&self) -> Duration {
        self.delta.mul_f32(self.time_scale)
    }

    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32() * self.time_scale
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// 0.5 plays animations at half speed; 0.0 freezes them.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn pause(&mut self) {
        self.time_scale = 0.0;
    }

    pub fn resume(&mut self) {
        self.time_scale = 1.0;
    }

    pub fn is_paused(&self) -> bool {
        self.time_scale == 0.0
    }

    #[inline]
    pub fn max_delta(&self) -> Duration {
        self.max_delta
    }

    pub fn set_max_delta(&mut self, max_delta: Duration) {
        self.max_delta = max_delta;
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}
