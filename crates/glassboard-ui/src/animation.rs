//! Animated scalar values for dashboard feedback.
//!
//! Every animated quantity on the dashboard (card lift scale, navigation
//! progress, content margin) is an [`AnimatedValue`]: a plain state struct that
//! owns its current value and at most one in-flight [`Motion`]. Starting a new
//! motion replaces the old one and starts from the current value, so a value
//! never jumps when it is retargeted mid-flight.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use glassboard_ui::animation::{AnimatedValue, EasingFunction};
//!
//! let mut progress = AnimatedValue::new(0.0);
//! progress.animate_to(1.0, Duration::from_millis(300), EasingFunction::EaseInOut);
//!
//! // Drive from the frame loop.
//! while progress.is_animating() {
//!     progress.tick(Duration::from_millis(16));
//! }
//! assert_eq!(progress.value(), 1.0);
//! ```

use std::time::Duration;

/// Maximum integration step for springs. Larger frame deltas are subdivided.
const MAX_SPRING_STEP_SECS: f32 = 0.004;

/// Longest span a single spring tick integrates; any spring that can settle
/// has settled well within it.
const SPRING_SETTLE_HORIZON_SECS: f32 = 10.0;

/// Easing functions for timing animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in-out
    CubicInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    ///
    /// Every curve here is monotonically non-decreasing and maps 0 to 0 and
    /// 1 to 1.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseIn => t * t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicIn => t * t * t,
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// Result of advancing an animated value by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Nothing was in flight.
    Idle,
    /// A motion is still in flight after this tick.
    Running,
    /// The motion finished during this tick.
    Completed,
}

/// A fixed-duration eased transition between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
}

impl Timing {
    pub fn new(from: f32, to: f32, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized elapsed time in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`. Returns true while the timing is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        !self.is_finished()
    }
}

/// Stiffness and damping for a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    /// Displacement below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl SpringConfig {
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness.max(0.1);
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping.max(0.0);
        self
    }
}

impl Default for SpringConfig {
    /// Slightly underdamped, giving a small overshoot on the card lift.
    fn default() -> Self {
        Self {
            stiffness: 230.0,
            damping: 22.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

/// A damped harmonic oscillator moving toward a target.
///
/// Integrated with semi-implicit Euler; frame deltas longer than 4ms are
/// split into smaller steps so high stiffness stays stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    at_rest: bool,
}

impl Spring {
    pub fn new(position: f32, target: f32, config: SpringConfig) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            config,
            at_rest: false,
        }
    }

    /// Start with an initial velocity, used when retargeting a moving spring.
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Advance by `dt`. Returns true while the spring is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }

        let span = dt.as_secs_f32().min(SPRING_SETTLE_HORIZON_SECS);
        let steps = (span / MAX_SPRING_STEP_SECS).ceil() as u32;
        if steps == 0 {
            return true;
        }
        let step = span / steps as f32;

        for _ in 0..steps {
            let displacement = self.position - self.target;
            let accel = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += accel * step;
            self.position += self.velocity * step;

            if (self.position - self.target).abs() <= self.config.rest_displacement
                && self.velocity.abs() <= self.config.rest_speed
            {
                self.position = self.target;
                self.velocity = 0.0;
                self.at_rest = true;
                break;
            }
        }

        !self.at_rest
    }
}

/// The driver currently moving an [`AnimatedValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    Timing(Timing),
    Spring(Spring),
}

impl Motion {
    fn value(&self) -> f32 {
        match self {
            Motion::Timing(timing) => timing.value(),
            Motion::Spring(spring) => spring.position(),
        }
    }

    fn target(&self) -> f32 {
        match self {
            Motion::Timing(timing) => timing.target(),
            Motion::Spring(spring) => spring.target(),
        }
    }

    fn tick(&mut self, dt: Duration) -> bool {
        match self {
            Motion::Timing(timing) => timing.tick(dt),
            Motion::Spring(spring) => spring.tick(dt),
        }
    }
}

/// A scalar with at most one in-flight motion.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    motion: Option<Motion>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            motion: None,
        }
    }

    /// The value as of the last tick.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Where the value is heading; the current value when idle.
    pub fn target(&self) -> f32 {
        self.motion.as_ref().map_or(self.value, Motion::target)
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    /// Snap to `value`, cancelling any in-flight motion.
    pub fn set(&mut self, value: f32) {
        self.motion = None;
        self.value = value;
    }

    /// Jump to the current target and drop the motion.
    pub fn finish(&mut self) {
        if let Some(motion) = self.motion.take() {
            self.value = motion.target();
        }
    }

    /// Start an eased transition from the current value toward `to`.
    ///
    /// Returns false when nothing was started: the value is already settled
    /// at `to`, or a timing toward `to` is already in flight.
    pub fn animate_to(&mut self, to: f32, duration: Duration, easing: EasingFunction) -> bool {
        match &self.motion {
            None if self.value == to => return false,
            Some(Motion::Timing(timing)) if timing.target() == to => return false,
            _ => {}
        }

        if duration.is_zero() {
            self.set(to);
            return true;
        }

        self.motion = Some(Motion::Timing(Timing::new(self.value, to, duration, easing)));
        true
    }

    /// Start a spring from the current value toward `to`.
    ///
    /// A spring that is already moving keeps its velocity.
    pub fn spring_to(&mut self, to: f32, config: SpringConfig) -> bool {
        let velocity = match &self.motion {
            None if self.value == to => return false,
            Some(Motion::Spring(spring)) => spring.velocity(),
            _ => 0.0,
        };

        self.motion = Some(Motion::Spring(
            Spring::new(self.value, to, config).with_velocity(velocity),
        ));
        true
    }

    /// Advance the in-flight motion by `dt`.
    pub fn tick(&mut self, dt: Duration) -> AnimationState {
        let Some(motion) = self.motion.as_mut() else {
            return AnimationState::Idle;
        };

        let running = motion.tick(dt);
        self.value = motion.value();
        if running {
            AnimationState::Running
        } else {
            self.value = motion.target();
            self.motion = None;
            AnimationState::Completed
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(value: &mut AnimatedValue, max_frames: usize) -> usize {
        let mut frames = 0;
        while value.is_animating() && frames < max_frames {
            value.tick(FRAME);
            frames += 1;
        }
        frames
    }

    #[test]
    fn test_linear_easing() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_easings_are_monotonic() {
        let curves = [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::CubicIn,
            EasingFunction::CubicOut,
            EasingFunction::CubicInOut,
        ];
        for curve in curves {
            let mut prev = curve.apply(0.0);
            for i in 1..=100 {
                let next = curve.apply(i as f32 / 100.0);
                assert!(next >= prev - 1e-6, "{curve:?} decreased at {i}");
                prev = next;
            }
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_timing_update() {
        let mut timing = Timing::new(0.0, 1.0, Duration::from_secs(1), EasingFunction::Linear);

        assert_eq!(timing.value(), 0.0);

        assert!(timing.tick(Duration::from_millis(500)));
        assert!((timing.value() - 0.5).abs() < 0.01);

        assert!(!timing.tick(Duration::from_millis(500)));
        assert_eq!(timing.value(), 1.0);
    }

    #[test]
    fn test_animate_to_completes_with_exact_target() {
        let mut value = AnimatedValue::new(0.0);
        assert!(value.animate_to(1.0, Duration::from_millis(300), EasingFunction::EaseInOut));

        let mut completed = 0;
        for _ in 0..30 {
            if value.tick(FRAME) == AnimationState::Completed {
                completed += 1;
            }
        }
        assert_eq!(completed, 1);
        assert_eq!(value.value(), 1.0);
        assert_eq!(value.tick(FRAME), AnimationState::Idle);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, Duration::from_millis(300), EasingFunction::EaseInOut);
        for _ in 0..6 {
            value.tick(FRAME);
        }
        let midway = value.value();
        assert!(midway > 0.0 && midway < 1.0);

        value.animate_to(0.0, Duration::from_millis(300), EasingFunction::EaseInOut);
        value.tick(Duration::from_millis(1));
        assert!(value.value() <= midway);
        assert!(value.value() > 0.0);
    }

    #[test]
    fn test_settled_retarget_is_noop() {
        let mut value = AnimatedValue::new(1.0);
        assert!(!value.animate_to(1.0, Duration::from_millis(300), EasingFunction::Linear));
        assert!(!value.spring_to(1.0, SpringConfig::default()));
        assert!(!value.is_animating());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(5.0, Duration::ZERO, EasingFunction::Linear);
        assert_eq!(value.value(), 5.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_spring_converges() {
        let mut value = AnimatedValue::new(1.0);
        value.spring_to(1.05, SpringConfig::default());
        let frames = run(&mut value, 600);
        assert!(frames < 600, "spring never settled");
        assert_eq!(value.value(), 1.05);
    }

    #[test]
    fn test_spring_large_dt_is_stable() {
        let mut spring = Spring::new(0.0, 1.0, SpringConfig::default().with_stiffness(1000.0));
        spring.tick(Duration::from_millis(500));
        assert!(spring.position().is_finite());
        assert!((spring.position() - 1.0).abs() < 0.5);
    }

    #[test]
    fn test_huge_delta_settles_spring() {
        for dt in [Duration::from_secs(7 * 86400), Duration::MAX] {
            let mut value = AnimatedValue::new(1.0);
            value.spring_to(1.05, SpringConfig::default());
            value.tick(FRAME);

            assert_eq!(value.tick(dt), AnimationState::Completed);
            assert_eq!(value.value(), 1.05);
        }
    }

    #[test]
    fn test_huge_delta_finishes_timing() {
        for dt in [Duration::from_secs(7 * 86400), Duration::MAX] {
            let mut value = AnimatedValue::new(0.0);
            value.animate_to(1.0, Duration::from_millis(300), EasingFunction::EaseInOut);
            value.tick(FRAME);

            assert_eq!(value.tick(dt), AnimationState::Completed);
            assert_eq!(value.value(), 1.0);
        }
    }

    #[test]
    fn test_spring_retarget_keeps_velocity() {
        let mut value = AnimatedValue::new(1.0);
        value.spring_to(1.05, SpringConfig::default());
        value.tick(FRAME);
        let velocity = match value.motion() {
            Some(Motion::Spring(spring)) => spring.velocity(),
            other => panic!("expected spring, got {other:?}"),
        };
        assert!(velocity > 0.0);

        value.spring_to(1.0, SpringConfig::default());
        match value.motion() {
            Some(Motion::Spring(spring)) => assert_eq!(spring.velocity(), velocity),
            other => panic!("expected spring, got {other:?}"),
        }
    }

    #[test]
    fn test_set_cancels_motion() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, Duration::from_secs(1), EasingFunction::Linear);
        value.set(0.25);
        assert!(!value.is_animating());
        assert_eq!(value.tick(FRAME), AnimationState::Idle);
        assert_eq!(value.value(), 0.25);
    }
}
