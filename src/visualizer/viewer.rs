// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window viewer for displaying rendered overlay frames.

use image::RgbaImage;
use minifb::{Key, Window, WindowOptions};

use crate::error::{OverlayError, Result};

/// A simple frame viewer using minifb.
pub struct Viewer {
    window: Window,
    /// Current display width in pixels.
    pub width: usize,
    /// Current display height in pixels.
    pub height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    /// Create a new viewer window.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::VisualizerError`] if the window cannot be created.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| OverlayError::VisualizerError(format!("Failed to create window: {e}")))?;

        // Limit update rate
        window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));

        Ok(Self {
            window,
            width,
            height,
            buffer: Vec::new(),
        })
    }

    /// Update the window with a rendered frame.
    ///
    /// # Returns
    ///
    /// * `Ok(false)` once the window is closed or Escape/Q is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::VisualizerError`] if the window update fails.
    pub fn update(&mut self, frame: &RgbaImage) -> Result<bool> {
        if !self.window.is_open()
            || self.window.is_key_down(Key::Escape)
            || self.window.is_key_down(Key::Q)
        {
            return Ok(false);
        }

        let (frame_width, frame_height) = (frame.width() as usize, frame.height() as usize);

        let num_pixels = frame_width * frame_height;
        if self.buffer.len() != num_pixels {
            self.buffer.resize(num_pixels, 0);
        }

        // Pack RGBA pixels into the 0x00RRGGBB format minifb expects;
        // alpha is dropped, the overlay is already composited.
        for (i, pixel) in frame.pixels().enumerate() {
            let r = u32::from(pixel.0[0]);
            let g = u32::from(pixel.0[1]);
            let b = u32::from(pixel.0[2]);
            self.buffer[i] = (r << 16) | (g << 8) | b;
        }

        if self.width != frame_width || self.height != frame_height {
            self.width = frame_width;
            self.height = frame_height;
        }

        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| OverlayError::VisualizerError(format!("Failed to update window: {e}")))?;

        Ok(true)
    }

    /// Keep the window responsive for `duration` after the last update.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible for parity with [`Viewer::update`].
    pub fn wait(&mut self, duration: std::time::Duration) -> Result<bool> {
        if self.buffer.is_empty() {
            return Ok(true);
        }

        let start = std::time::Instant::now();
        while start.elapsed() < duration {
            if !self.window.is_open()
                || self.window.is_key_down(Key::Escape)
                || self.window.is_key_down(Key::Q)
            {
                return Ok(false);
            }
            // minifb enforces the frame limit set in new(), so this loop
            // does not spin a full core.
            let _ = self
                .window
                .update_with_buffer(&self.buffer, self.width, self.height);
        }
        Ok(true)
    }
}
