/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate. Positions,
/// drag offsets and viewport extents are all carried as [`Vec2`] in logical pixels.
///
/// # Examples
///
/// ```
/// use glassboard_core::math::Vec2;
///
/// let base = Vec2::new(20.0, 20.0);
/// let offset = Vec2::new(200.0, 0.0);
/// assert_eq!(base + offset, Vec2::new(220.0, 20.0));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;

/// Linearly interpolate between `from` and `to`.
///
/// `t` is not clamped; callers that need a bounded result clamp it first.
///
/// ```
/// use glassboard_core::math::lerp;
///
/// assert_eq!(lerp(70.0, 200.0, 0.0), 70.0);
/// assert_eq!(lerp(70.0, 200.0, 1.0), 200.0);
/// assert_eq!(lerp(-20.0, 0.0, 0.5), -10.0);
/// ```
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Clamp `value` into `[0, upper]`, pinning to zero when `upper` is negative.
///
/// This is `max(0, min(upper, value))`, so it never panics the way
/// [`f32::clamp`] does for an inverted range.
///
/// ```
/// use glassboard_core::math::clamp_to_extent;
///
/// assert_eq!(clamp_to_extent(220.0, 115.0), 115.0);
/// assert_eq!(clamp_to_extent(-5.0, 115.0), 0.0);
/// assert_eq!(clamp_to_extent(30.0, -40.0), 0.0);
/// ```
#[inline]
pub fn clamp_to_extent(value: f32, upper: f32) -> f32 {
    value.min(upper).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        assert!((lerp(70.0, 200.0, 0.5) - 135.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clamp_to_extent_inside() {
        assert_eq!(clamp_to_extent(42.0, 115.0), 42.0);
    }

    #[test]
    fn test_clamp_to_extent_negative_upper() {
        assert_eq!(clamp_to_extent(-10.0, -1.0), 0.0);
        assert_eq!(clamp_to_extent(10.0, -1.0), 0.0);
    }
}
