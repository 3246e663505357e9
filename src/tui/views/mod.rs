//! Explorer views for the TUI.

mod dependencies;
mod overlays;
mod regions;

pub use dependencies::render_dependencies;
pub use overlays::{render_help_overlay, render_legend_overlay};
pub use regions::render_regions;
