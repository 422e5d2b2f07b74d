//! Replayable gesture scripts.

use std::collections::VecDeque;

use glassboard_core::input::{GestureSample, GestureSource};
use glassboard_core::math::Vec2;

/// A gesture split into frames.
///
/// Samples of the current frame are handed out by
/// [`poll_sample`](GestureSource::poll_sample); [`advance`](Self::advance)
/// moves on to the next frame. Build scripts with the chained helpers:
///
/// ```rust
/// use glassboard_test_utils::ScriptedGestureSource;
///
/// let script = ScriptedGestureSource::new()
///     .press()
///     .drag_to(200.0, 0.0, 4)
///     .release();
/// assert_eq!(script.total_samples(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedGestureSource {
    frames: VecDeque<Vec<GestureSample>>,
    current: VecDeque<GestureSample>,
    last_delta: Vec2,
}

impl ScriptedGestureSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame containing `samples` verbatim.
    pub fn frame(mut self, samples: impl IntoIterator<Item = GestureSample>) -> Self {
        let samples: Vec<_> = samples.into_iter().collect();
        if let Some(last) = samples.last() {
            self.last_delta = last.delta;
        }
        self.frames.push_back(samples);
        self
    }

    /// Append a frame with a `Start` sample.
    pub fn press(self) -> Self {
        self.frame([GestureSample::start()])
    }

    /// Append `steps` frames moving linearly from the last delta to `(dx, dy)`.
    ///
    /// Deltas are cumulative since the press, as a pan recognizer reports them.
    pub fn drag_to(mut self, dx: f32, dy: f32, steps: usize) -> Self {
        let from = self.last_delta;
        let to = Vec2::new(dx, dy);
        let steps = steps.max(1);
        for step in 1..=steps {
            let delta = from.lerp(to, step as f32 / steps as f32);
            self = self.frame([GestureSample::moved(delta.x, delta.y)]);
        }
        self
    }

    /// Append a frame with several move samples, as a fast pointer would
    /// deliver between two frames.
    pub fn burst(self, deltas: impl IntoIterator<Item = (f32, f32)>) -> Self {
        self.frame(
            deltas
                .into_iter()
                .map(|(dx, dy)| GestureSample::moved(dx, dy)),
        )
    }

    /// Append a frame with an `End` sample at the last delta.
    pub fn release(self) -> Self {
        let delta = self.last_delta;
        self.frame([GestureSample::end(delta)])
    }

    /// Frames not yet advanced into.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn total_samples(&self) -> usize {
        self.current.len() + self.frames.iter().map(Vec::len).sum::<usize>()
    }

    /// Move to the next frame, discarding any unpolled samples of the
    /// current one. Returns false once the script is exhausted.
    pub fn advance(&mut self) -> bool {
        match self.frames.pop_front() {
            Some(frame) => {
                self.current = frame.into();
                true
            }
            None => {
                self.current.clear();
                false
            }
        }
    }

    /// Every remaining sample in order, ignoring frame boundaries.
    pub fn into_samples(self) -> VecDeque<GestureSample> {
        let mut samples = self.current;
        samples.extend(self.frames.into_iter().flatten());
        samples
    }
}

impl GestureSource for ScriptedGestureSource {
    fn poll_sample(&mut self) -> Option<GestureSample> {
        self.current.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glassboard_core::input::GesturePhase;

    #[test]
    fn test_drag_interpolates_cumulative_deltas() {
        let samples: Vec<_> = ScriptedGestureSource::new()
            .press()
            .drag_to(100.0, -40.0, 4)
            .release()
            .into_samples()
            .into();

        assert_eq!(samples.len(), 6);
        assert_eq!(samples[1].delta, Vec2::new(25.0, -10.0));
        assert_eq!(samples[4].delta, Vec2::new(100.0, -40.0));
        assert_eq!(samples[5].phase, GesturePhase::End);
        assert_eq!(samples[5].delta, Vec2::new(100.0, -40.0));
    }

    #[test]
    fn test_samples_are_held_until_advance() {
        let mut source = ScriptedGestureSource::new().press().release();
        assert!(source.poll_sample().is_none());

        assert!(source.advance());
        assert!(source.poll_sample().is_some());
        assert!(source.poll_sample().is_none());

        assert!(source.advance());
        assert!(!source.advance());
    }

    #[test]
    fn test_burst_keeps_every_sample() {
        let mut source = ScriptedGestureSource::new().burst([(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        source.advance();
        let mut count = 0;
        while source.poll_sample().is_some() {
            count += 1;
        }
        assert_eq!(count, 3);
    }
}
