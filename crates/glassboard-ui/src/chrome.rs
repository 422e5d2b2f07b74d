//! Visual chrome: gradients, blur and card styling.
//!
//! These are static inputs for the renderer; nothing here animates.

use crate::color::Color;

/// Title shown above the widget grid.
pub const HEADER_TITLE: &str = "Dashboard";
/// Subtitle shown under the title.
pub const HEADER_SUBTITLE: &str = "Welcome back! Here's your overview";

/// Top-to-bottom stops of the screen background.
pub const BACKGROUND_GRADIENT: [Color; 3] = [
    Color::from_hex(0x000000),
    Color::from_hex(0x1A1A1A),
    Color::from_hex(0x2D2D2D),
];

/// Tint for the active navigation item's icon and label.
pub const NAV_ACTIVE_TINT: Color = Color::from_hex(0x007AFF);
/// Background behind the active navigation item.
pub const NAV_ACTIVE_BACKGROUND: Color = Color::rgba(0.0, 122.0 / 255.0, 1.0, 0.2);
/// Backdrop blur strength behind the rail.
pub const NAV_BLUR_INTENSITY: u8 = 100;

/// Styling of one widget card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub gradient: [Color; 2],
    pub border: Color,
    pub corner_radius: f32,
    pub blur_intensity: u8,
}

impl CardStyle {
    /// Card style tinted by the widget's accent color.
    pub fn tinted(accent: Color) -> Self {
        Self {
            gradient: [accent.with_alpha_u8(0x40), accent.with_alpha_u8(0x20)],
            border: Color::WHITE.with_alpha(0.1),
            corner_radius: 16.0,
            blur_intensity: 80,
        }
    }
}
