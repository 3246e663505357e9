//! Configuration validation for cloud-deps.

use super::defaults::VALID_THEMES;
use super::types::{AppConfig, DetectionConfig, TuiConfig};
use url::Url;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.detection.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for DetectionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match Url::parse(&self.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ConfigError {
                field: "detection.endpoint".to_string(),
                message: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
            }),
            Err(e) => errors.push(ConfigError {
                field: "detection.endpoint".to_string(),
                message: format!("Invalid URL '{}': {e}", self.endpoint),
            }),
        }

        if self.timeout_secs == Some(0) {
            errors.push(ConfigError {
                field: "detection.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            });
        }

        if self.debounce_ms > 10_000 {
            errors.push(ConfigError {
                field: "tui.debounce_ms".to_string(),
                message: format!("Debounce must be at most 10000 ms, got {}", self.debounce_ms),
            });
        }

        if !(10..=1000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: "tui.tick_rate_ms".to_string(),
                message: format!(
                    "Tick rate must be between 10 and 1000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }

        errors
    }
}
