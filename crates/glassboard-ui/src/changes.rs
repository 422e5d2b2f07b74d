//! What a frame changed, so renderers can skip untouched layers.

use bitflags::bitflags;

use crate::animation::AnimationState;

bitflags! {
    /// Layers touched by one [`Dashboard::frame`](crate::Dashboard::frame).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FrameChanges: u8 {
        const NONE      = 0;

        /// A release was committed to the widget store.
        const LAYOUT    = 1 << 0;

        /// A card's live offset or lift scale changed.
        const TRANSFORM = 1 << 1;

        /// Rail width or label opacity/offset changed.
        const NAV       = 1 << 2;

        /// The content margin changed.
        const MARGIN    = 1 << 3;
    }
}

impl FrameChanges {
    /// Everything that only needs a repaint.
    pub const PAINT_GROUP: Self = Self::TRANSFORM.union(Self::NAV);

    /// The flag for `layer` if `state` moved the value this frame.
    pub fn from_animation(state: AnimationState, layer: Self) -> Self {
        match state {
            AnimationState::Idle => Self::NONE,
            AnimationState::Running | AnimationState::Completed => layer,
        }
    }

    pub fn needs_layout(self) -> bool {
        self.intersects(Self::LAYOUT | Self::MARGIN)
    }

    pub fn is_paint_only(self) -> bool {
        !self.is_empty() && Self::PAINT_GROUP.contains(self)
    }
}

impl Default for FrameChanges {
    fn default() -> Self {
        Self::NONE
    }
}
