// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

#[cfg(feature = "visualize")]
use std::time::Duration;

use image::{Rgba, RgbaImage};

use crate::cli::args::RenderArgs;
use crate::cli::logging::set_verbose;
use crate::demo::synthetic_objects;
use crate::geometry::Scale;
use crate::render::render_2d;
use crate::tracking::should_render;
#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;
use crate::{error, success, verbose};

/// Background fill for demo frames.
const BACKGROUND: Rgba<u8> = Rgba([32, 32, 32, 255]);

/// Render a synthetic overlay frame per the CLI arguments.
#[allow(clippy::cast_precision_loss)]
pub fn run_render(args: &RenderArgs) {
    set_verbose(args.verbose);

    if args.width == 0 || args.height == 0 {
        error!("Frame dimensions must be non-zero ({}x{})", args.width, args.height);
        process::exit(1);
    }
    if args.scale <= 0.0 {
        error!("Scale must be positive, got {}", args.scale);
        process::exit(1);
    }

    let scale = Scale::new(args.scale, args.scale);
    // The generator works in detection coordinates; map the display frame
    // back through the scale so generated poses land inside it.
    let detection_width = args.width as f32 / scale.x;
    let detection_height = args.height as f32 / scale.y;

    let objects = synthetic_objects(args.bodies, detection_width, detection_height, args.seed);
    let rendered = objects
        .iter()
        .filter(|o| should_render(o.state, args.show_only_ok))
        .count();
    verbose!(
        "Rendering {rendered}/{} bodies onto a {}x{} frame (seed {})",
        objects.len(),
        args.width,
        args.height,
        args.seed
    );

    let mut frame = RgbaImage::from_pixel(args.width, args.height, BACKGROUND);
    if let Err(e) = render_2d(&mut frame, scale, &objects, args.show_only_ok) {
        error!("Render failed: {e}");
        process::exit(1);
    }

    for object in &objects {
        verbose!(
            "  track {:>2} [{}]{}",
            object.id,
            object.state,
            if should_render(object.state, args.show_only_ok) {
                ""
            } else {
                " (skipped)"
            }
        );
    }

    if let Some(ref output) = args.output {
        if let Err(e) = frame.save(output) {
            error!("Failed to save {output}: {e}");
            process::exit(1);
        }
        success!("Saved overlay to {output}");
    }

    #[cfg(feature = "visualize")]
    if args.show {
        show_frame(&frame);
    }

    #[cfg(not(feature = "visualize"))]
    if args.show {
        error!("--show requires the 'visualize' feature");
        process::exit(1);
    }
}

#[cfg(feature = "visualize")]
fn show_frame(frame: &RgbaImage) {
    let mut viewer = match Viewer::new(
        "body-overlay",
        frame.width() as usize,
        frame.height() as usize,
    ) {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to open window: {e}");
            process::exit(1);
        }
    };

    match viewer.update(frame) {
        Ok(true) => {
            // Keep the frame up until the window is closed.
            while let Ok(true) = viewer.wait(Duration::from_millis(100)) {}
        }
        Ok(false) => {}
        Err(e) => {
            error!("Failed to display frame: {e}");
            process::exit(1);
        }
    }
}
