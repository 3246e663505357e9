//! Interactive terminal dashboard built on ratatui.
//!
//! Two views share one [`App`]: the dependency explorer (search, provider
//! pills, pie chart, logo grid and the add-company form) and the AWS regions
//! explorer. A root switcher toggles between them.
//!
//! # Architecture
//!
//! All explorer semantics live in [`crate::explorer`]; this module only maps
//! key and mouse events onto it and renders its derived views. Provider
//! detection runs on a worker thread and reports back over a channel that is
//! drained on every tick.

mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

// Shared state exports
pub use state::{ListNavigation, ListState};

// ViewModel exports
pub use viewmodel::{
    CycleFilter, FilterState, GeographyFilter, OverlayKind, OverlayState, StatusKind,
    StatusMessage,
};

pub use app::{ActiveView, App, Focus, HitAreas};
pub use events::{handle_key_event, handle_mouse_event, Event, EventHandler};
pub use ui::run_tui;
