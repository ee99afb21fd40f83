// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Per-frame skeletal overlay rendering.
//!
//! This is the orchestration layer: it filters tracked objects, maps their
//! keypoints into display pixels, draws bones and joints with binary
//! clipping, and composites the result back onto the caller's frame.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_antialiased_line_segment_mut, draw_filled_circle_mut};
use imageproc::pixelops::interpolate;

use crate::color::Color;
use crate::compositor::FrameCompositor;
use crate::error::{OverlayError, Result};
use crate::geometry::{spine_point, Scale};
use crate::skeleton::{Joint, SKELETON_BONES};
use crate::tracking::{should_render, TrackedObject};

/// Radius of the filled circle drawn at each joint, in pixels.
pub const JOINT_RADIUS: i32 = 3;

/// Draw the 2D skeletal overlay for every renderable object onto `frame`.
///
/// Objects are processed in input order, so later objects draw on top of
/// earlier ones where they overlap. A bone is drawn only when both of its
/// endpoints land inside the frame (binary clipping, never a truncated
/// segment); joints get a small filled circle under the same bounds test.
/// The derived spine point participates as one extra bone (spine to neck)
/// and one extra circle per object.
///
/// After drawing, the pre-draw snapshot is blended back at 0.1 weight
/// (see [`FrameCompositor`]).
///
/// # Errors
///
/// Returns [`OverlayError::ContractViolation`] if any object carries the
/// wrong number of keypoints. Degenerate inputs (empty list, negative ids,
/// keypoints outside the frame) are not errors and simply draw less.
pub fn render_2d(
    frame: &mut RgbaImage,
    scale: Scale,
    objects: &[TrackedObject],
    show_only_ok: bool,
) -> Result<()> {
    let compositor = FrameCompositor::new(frame);
    draw_objects(frame, scale, objects, show_only_ok)?;
    compositor.blend_into(frame)
}

fn draw_objects(
    frame: &mut RgbaImage,
    scale: Scale,
    objects: &[TrackedObject],
    show_only_ok: bool,
) -> Result<()> {
    let (width, height) = frame.dimensions();

    for object in objects {
        if object.keypoints.len() != Joint::COUNT {
            return Err(OverlayError::ContractViolation(format!(
                "object {} has {} keypoints, expected {}",
                object.id,
                object.keypoints.len(),
                Joint::COUNT
            )));
        }
        if !should_render(object.state, show_only_ok) {
            continue;
        }

        let color: Rgba<u8> = Color::from_track_id(object.id).into();
        let pixels: Vec<(i32, i32)> = object
            .keypoints
            .iter()
            .map(|kp| kp.to_pixel(scale))
            .collect();
        let spine = spine_point(&object.keypoints)?.to_pixel(scale);

        for (start, end) in visible_bones(&pixels, spine, width, height) {
            draw_antialiased_line_segment_mut(frame, start, end, color, interpolate);
        }

        for &pixel in pixels.iter().chain(std::iter::once(&spine)) {
            if contains(pixel, width, height) {
                draw_filled_circle_mut(frame, pixel, JOINT_RADIUS, color);
            }
        }
    }

    Ok(())
}

/// Bones whose endpoints both land inside the frame, as pixel segments.
/// The synthetic spine-to-neck bone comes last.
fn visible_bones(
    pixels: &[(i32, i32)],
    spine: (i32, i32),
    width: u32,
    height: u32,
) -> Vec<((i32, i32), (i32, i32))> {
    let mut bones = Vec::with_capacity(SKELETON_BONES.len() + 1);

    for (a, b) in SKELETON_BONES {
        let start = pixels[a.index()];
        let end = pixels[b.index()];
        if contains(start, width, height) && contains(end, width, height) {
            bones.push((start, end));
        }
    }

    let neck = pixels[Joint::Neck.index()];
    if contains(spine, width, height) && contains(neck, width, height) {
        bones.push((spine, neck));
    }

    bones
}

/// Inclusive bounds test: is the pixel inside `[0, width-1] x [0, height-1]`?
const fn contains(pixel: (i32, i32), width: u32, height: u32) -> bool {
    pixel.0 >= 0 && pixel.1 >= 0 && pixel.0 < width as i32 && pixel.1 < height as i32
}
