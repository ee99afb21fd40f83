// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for the overlay demo.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `render` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Logging helpers.
pub mod logging;

/// Render command logic.
pub mod render;
