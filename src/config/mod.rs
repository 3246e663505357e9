//! Configuration module for cloud-deps.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cloud_deps::config::AppConfig;
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .endpoint("https://deps.example.com/api/detect-cloud")
//!     .theme("light")
//!     .build();
//!
//! // Load from file
//! use cloud_deps::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.cloud-deps.yaml` file in the working directory or
//! `~/.config/cloud-deps/`:
//!
//! ```yaml
//! detection:
//!   endpoint: https://deps.example.com/api/detect-cloud
//!   timeout_secs: 10
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_LOGO_PROBE_TIMEOUT_SECS, DEFAULT_THEME, DEFAULT_TICK_RATE_MS,
    VALID_THEMES,
};
pub use types::{AppConfig, AppConfigBuilder, DetectionConfig, TuiConfig, TuiPreferences};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, ConfigOverrides, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.cloud-deps.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
