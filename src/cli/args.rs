// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Render Options:
    --width <WIDTH>        Frame width in pixels [default: 1280]
    --height <HEIGHT>      Frame height in pixels [default: 720]
    --bodies <BODIES>      Number of synthetic bodies to render [default: 4]
    --scale <SCALE>        Detection-to-display scale factor [default: 1.0]
    --show-only-ok         Render only actively tracked objects
    --seed <SEED>          Seed for the synthetic pose generator [default: 42]
    --output, -o <OUTPUT>  Save the rendered frame as PNG
    --show                 Display the rendered frame in a window
    --verbose              Show verbose output

Examples:
    body-overlay render
    body-overlay render --bodies 8 --output overlay.png
    body-overlay render --width 640 --height 480 --show
    body-overlay render --seed 7 --show-only-ok -o strict.png"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a skeletal overlay for synthetic tracked bodies
    Render(RenderArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Frame width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Number of synthetic bodies to render
    #[arg(long, default_value_t = 4)]
    pub bodies: usize,

    /// Detection-to-display scale factor (applied to both axes)
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Render only actively tracked objects
    #[arg(long, default_value_t = false)]
    pub show_only_ok: bool,

    /// Seed for the synthetic pose generator
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Save the rendered frame as PNG
    #[arg(short, long)]
    pub output: Option<String>,

    /// Display the rendered frame in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
