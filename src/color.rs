// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Color definitions and the per-track palette.

use image::Rgba;

/// RGBA color with components in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

/// Fixed 8-entry palette cycled by track id.
pub const ID_COLORS: [[u8; 3]; 8] = [
    [232, 176, 59],
    [165, 218, 25],
    [102, 205, 105],
    [185, 0, 255],
    [99, 107, 252],
    [252, 225, 8],
    [167, 130, 141],
    [194, 72, 113],
];

/// Color used for untracked objects (negative id).
pub const DEFAULT_ID_COLOR: Color = Color(236, 184, 36, 255);

impl Color {
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0, 255);

    /// Create a new opaque color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// Get the deterministic color for a track id.
    ///
    /// Negative ids (untracked/invalid) map to [`DEFAULT_ID_COLOR`];
    /// non-negative ids cycle through [`ID_COLORS`] with period 8.
    /// Pure function: the same id always yields the same color.
    #[must_use]
    pub fn from_track_id(id: i32) -> Self {
        if id < 0 {
            return DEFAULT_ID_COLOR;
        }
        let offset = (id % ID_COLORS.len() as i32) as usize;
        let [r, g, b] = ID_COLORS[offset];
        Self(r, g, b, 255)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.0, color.1, color.2, color.3])
    }
}
