// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Window display for rendered overlay frames.

#[cfg(feature = "visualize")]
pub mod viewer;

#[cfg(feature = "visualize")]
pub use viewer::Viewer;
