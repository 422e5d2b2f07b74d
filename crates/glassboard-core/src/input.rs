//! Pointer gesture input primitives.
//!
//! A gesture is reported as a stream of [`GestureSample`]s. Every sample
//! carries the *cumulative* delta since the gesture's `Start`, in logical
//! pixels, so a consumer can always recompute the live position from the
//! latest sample alone.
//!
//! Platform pointer primitives can report moves faster than frames are
//! rendered. [`SampleCoalescer`] collapses runs of moves so that only the
//! latest move per frame is applied, while `Start` and `End` are always kept
//! in their original order.

use std::collections::VecDeque;

use crate::math::Vec2;

/// The phase of a single gesture sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Pointer pressed on the target.
    Start,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    End,
}

/// One sample from a pointer gesture stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    /// Total delta since the gesture started.
    pub delta: Vec2,
}

impl GestureSample {
    pub const fn new(phase: GesturePhase, delta: Vec2) -> Self {
        Self { phase, delta }
    }

    pub const fn start() -> Self {
        Self::new(GesturePhase::Start, Vec2::ZERO)
    }

    pub fn moved(dx: f32, dy: f32) -> Self {
        Self::new(GesturePhase::Move, Vec2::new(dx, dy))
    }

    /// A release sample. The delta of the last move is carried along for
    /// platforms that report it, but release handling does not depend on it.
    pub fn end(delta: Vec2) -> Self {
        Self::new(GesturePhase::End, delta)
    }

    pub fn is_move(&self) -> bool {
        self.phase == GesturePhase::Move
    }
}

/// A source of gesture samples for a single pointer.
///
/// Implemented by platform bindings and by scripted sources in tests.
pub trait GestureSource {
    /// Return the next pending sample, or `None` when the source is drained
    /// for this frame.
    fn poll_sample(&mut self) -> Option<GestureSample>;
}

impl GestureSource for VecDeque<GestureSample> {
    fn poll_sample(&mut self) -> Option<GestureSample> {
        self.pop_front()
    }
}

impl<S: GestureSource + ?Sized> GestureSource for &mut S {
    fn poll_sample(&mut self) -> Option<GestureSample> {
        (**self).poll_sample()
    }
}

/// Collapses consecutive move samples into the latest one.
///
/// # Example
///
/// ```
/// use glassboard_core::input::{GesturePhase, GestureSample, SampleCoalescer};
///
/// let mut coalescer = SampleCoalescer::new();
/// coalescer.push(GestureSample::start());
/// coalescer.push(GestureSample::moved(1.0, 0.0));
/// coalescer.push(GestureSample::moved(5.0, 2.0));
///
/// let samples = coalescer.flush();
/// assert_eq!(samples.len(), 2);
/// assert_eq!(samples[0].phase, GesturePhase::Start);
/// assert_eq!(samples[1], GestureSample::moved(5.0, 2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleCoalescer {
    pending: Vec<GestureSample>,
    dropped: u64,
}

impl SampleCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sample. A move directly following another move replaces it.
    pub fn push(&mut self, sample: GestureSample) {
        if sample.is_move()
            && let Some(last) = self.pending.last_mut()
            && last.is_move()
        {
            *last = sample;
            self.dropped += 1;
            return;
        }
        self.pending.push(sample);
    }

    /// Take every pending sample in arrival order.
    #[must_use]
    pub fn flush(&mut self) -> Vec<GestureSample> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of move samples superseded since creation.
    pub fn coalesced_count(&self) -> u64 {
        self.dropped
    }
}
