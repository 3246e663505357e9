//! Default values for cloud-deps configuration.

pub use crate::detect::DEFAULT_ENDPOINT;

/// Default theme name.
pub const DEFAULT_THEME: &str = "dark";

/// Delay before a URL-like search arms the add-url field.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Event loop tick interval.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Per-request timeout used by `cloud-deps logo` when probing images.
pub const DEFAULT_LOGO_PROBE_TIMEOUT_SECS: u64 = 5;

/// Theme names accepted by `tui.theme`.
pub const VALID_THEMES: [&str; 3] = ["dark", "light", "high-contrast"];
