//! View-state components owned by [`crate::tui::App`].
//!
//! - [`OverlayState`]: which popup (help, legend) is open
//! - [`StatusMessage`]: transient footer message with a [`StatusKind`]
//! - [`FilterState`]: cycling filter, used for the regions geography filter

mod filter;
mod overlay;
mod status;

pub use filter::{CycleFilter, FilterState, GeographyFilter};
pub use overlay::{OverlayKind, OverlayState};
pub use status::{StatusKind, StatusMessage};
