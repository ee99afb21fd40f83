// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! 2D point arithmetic and detection-to-display coordinate mapping.
//!
//! Kept as explicit component-wise operations so the core carries no
//! vector-math dependency.

use std::ops::{Add, Div, Mul};

use crate::error::{OverlayError, Result};
use crate::skeleton::Joint;

/// A 2D point in detection-frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point2 {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map this point to integer display-pixel coordinates.
    ///
    /// Component-wise multiply by the scale, then truncate to the pixel
    /// grid. Truncation is the pixel buffer's own coordinate representation;
    /// no additional rounding is applied.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixel(self, scale: Scale) -> (i32, i32) {
        ((self.x * scale.x) as i32, (self.y * scale.y) as i32)
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Point2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Per-axis scale factors mapping detection coordinates to display pixels
/// (display resolution / detection resolution).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Horizontal scale factor.
    pub x: f32,
    /// Vertical scale factor.
    pub y: f32,
}

impl Scale {
    /// Create a new scale pair.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Identity scale (detection space equals display space).
    pub const IDENTITY: Scale = Scale::new(1.0, 1.0);
}

/// Compute the derived spine point: the midpoint of the two hips,
/// in detection-frame coordinates (before pixel mapping).
///
/// # Errors
///
/// Returns [`OverlayError::ContractViolation`] if `keypoints` does not hold
/// exactly one entry per [`Joint`].
pub fn spine_point(keypoints: &[Point2]) -> Result<Point2> {
    if keypoints.len() != Joint::COUNT {
        return Err(OverlayError::ContractViolation(format!(
            "expected {} keypoints, got {}",
            Joint::COUNT,
            keypoints.len()
        )));
    }
    let left = keypoints[Joint::LeftHip.index()];
    let right = keypoints[Joint::RightHip.index()];
    Ok((left + right) / 2.0)
}

/// Center of an image-space bounding box (4 corners, top-left first,
/// clockwise), mapped into display pixels. Used by callers that place
/// track labels next to rendered skeletons.
#[must_use]
pub fn image_position(bounding_box: &[Point2; 4], scale: Scale) -> Point2 {
    let top_left = bounding_box[0];
    let bottom_right = bounding_box[2];
    Point2::new(
        (top_left.x + (bottom_right.x - top_left.x) * 0.5) * scale.x,
        (top_left.y + (bottom_right.y - top_left.y) * 0.5) * scale.y,
    )
}
