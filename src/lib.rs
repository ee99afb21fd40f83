// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Body Overlay Library
//!
//! 2D skeletal overlay rendering for body-tracking output, written in Rust.
//! Given per-object keypoint detections from an upstream tracking engine,
//! this crate draws bones and joints for each tracked body onto a display
//! frame: deterministic per-track coloring, detection-to-pixel coordinate
//! mapping, a fixed skeleton topology, bounds-clipped anti-aliased drawing,
//! and two-layer frame compositing.
//!
//! Detection, tracking, image acquisition, and the final display step are
//! external collaborators; one call renders one frame and returns.
//!
//! ## Quick Start
//!
//! ```no_run
//! use body_overlay::{render_2d, Scale, TrackedObject, TrackingState, Point2, Joint};
//! use image::RgbaImage;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut frame = RgbaImage::new(1280, 720);
//!
//!     // One keypoint per joint, in detection-frame coordinates.
//!     let keypoints = vec![Point2::new(640.0, 360.0); Joint::COUNT];
//!     let object = TrackedObject::new(0, TrackingState::Ok, keypoints)?;
//!
//!     // Detection space equals display space here.
//!     render_2d(&mut frame, Scale::IDENTITY, &[object], true)?;
//!     frame.save("overlay.png")?;
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! The `body-overlay` CLI renders synthetic tracked bodies for quick
//! inspection of the overlay output:
//!
//! ```bash
//! # Render four seeded bodies and save a PNG
//! body-overlay render --output overlay.png
//!
//! # Strict filtering, custom frame size, display in a window
//! body-overlay render --width 640 --height 480 --show-only-ok --show
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | Per-frame overlay rendering ([`render_2d`]) |
//! | [`skeleton`] | The [`Joint`] schema and the fixed bone table |
//! | [`color`] | Per-track-id color assignment ([`Color`]) |
//! | [`geometry`] | 2D points, scale mapping, derived spine point |
//! | [`tracking`] | [`TrackedObject`], [`TrackingState`], render filter |
//! | [`compositor`] | Two-layer frame blending ([`FrameCompositor`]) |
//! | [`demo`] | Seeded synthetic poses for the demo CLI |
//! | [`error`] | Error types ([`OverlayError`], [`Result`]) |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `visualize` | Real-time window display (default) |

// Modules
pub mod cli;
pub mod color;
pub mod compositor;
pub mod demo;
pub mod error;
pub mod geometry;
pub mod render;
pub mod skeleton;
pub mod tracking;
pub mod visualizer;

// Re-export main types for convenience
pub use color::{Color, DEFAULT_ID_COLOR, ID_COLORS};
pub use compositor::FrameCompositor;
pub use error::{OverlayError, Result};
pub use geometry::{image_position, spine_point, Point2, Scale};
pub use render::{render_2d, JOINT_RADIUS};
pub use skeleton::{Joint, SKELETON_BONES};
pub use tracking::{should_render, TrackedObject, TrackingState};

#[cfg(feature = "visualize")]
pub use visualizer::Viewer;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
