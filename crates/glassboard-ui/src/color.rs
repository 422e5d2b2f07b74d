/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Dashboard colors are authored as web-style hex codes:
///
/// ```
/// use glassboard_ui::Color;
///
/// let blue = Color::from_hex(0x007AFF);
/// let tint = blue.with_alpha_u8(0x40);
/// assert_eq!(Color::parse_hex("#007AFF"), Some(blue));
/// assert!((tint.a - 0x40 as f32 / 255.0).abs() < f32::EPSILON);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`, so a renderer
/// can upload it directly into instance buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF9500`).
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgba_u8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::from_hex(value >> 8).with_alpha_u8((value & 0xFF) as u8)),
            _ => None,
        }
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// The same color with an 8-bit alpha, as in a `#RRGGBBAA` suffix.
    pub const fn with_alpha_u8(self, a: u8) -> Self {
        self.with_alpha(a as f32 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
