// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use body_overlay::cli::args::{Cli, Commands};
use body_overlay::cli::render::run_render;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => run_render(&args),
    }
}
