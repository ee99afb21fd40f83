// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Two-layer frame compositing.
//!
//! The compositor snapshots the base frame into a secondary layer before any
//! overlay drawing happens, then blends the layer back at a fixed weight once
//! drawing is done. The layer is the seam where future auxiliary elements
//! (e.g. translucent instance masks) get drawn; today nothing draws on it, so
//! the blend only softens overlay pixels toward the pre-draw background.

use image::RgbaImage;

use crate::error::{OverlayError, Result};

/// Weight of the (drawn-on) base frame in the final blend.
pub const BASE_WEIGHT: f32 = 0.9;
/// Weight of the secondary layer in the final blend.
pub const LAYER_WEIGHT: f32 = 0.1;

/// Holds the secondary draw layer for one render call.
#[derive(Debug)]
pub struct FrameCompositor {
    layer: RgbaImage,
}

impl FrameCompositor {
    /// Snapshot the base frame into a fresh secondary layer.
    #[must_use]
    pub fn new(base: &RgbaImage) -> Self {
        Self {
            layer: base.clone(),
        }
    }

    /// Mutable access to the secondary layer, for auxiliary draw elements.
    pub fn layer_mut(&mut self) -> &mut RgbaImage {
        &mut self.layer
    }

    /// Blend the secondary layer onto the base frame in place:
    /// `base = base * 0.9 + layer * 0.1`, rounded to nearest per channel.
    ///
    /// Channels where base and layer agree come out bit-identical, so an
    /// untouched frame stays pixel-identical through the blend.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::ContractViolation`] if the base dimensions no
    /// longer match the snapshot.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend_into(&self, base: &mut RgbaImage) -> Result<()> {
        if base.dimensions() != self.layer.dimensions() {
            return Err(OverlayError::ContractViolation(format!(
                "frame resized during render: {:?} vs {:?}",
                base.dimensions(),
                self.layer.dimensions()
            )));
        }

        for (base_px, layer_px) in base.pixels_mut().zip(self.layer.pixels()) {
            for c in 0..4 {
                let blended = f32::from(base_px.0[c])
                    .mul_add(BASE_WEIGHT, f32::from(layer_px.0[c]) * LAYER_WEIGHT);
                base_px.0[c] = blended.round() as u8;
            }
        }
        Ok(())
    }
}
