//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".cloud-deps.yaml",
    ".cloud-deps.yml",
    "cloud-deps.yaml",
    "cloud-deps.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/cloud-deps/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!("Config file {} does not exist, searching defaults", path.display());
    }

    let cwd = std::env::current_dir().ok();
    let user_dir = dirs::config_dir().map(|d| d.join("cloud-deps"));
    let home = dirs::home_dir();

    [cwd, user_dir, home]
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file deserializes to unit, not a mapping
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// A file that fails to parse or validate is reported and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                let errors = config.validate();
                if errors.is_empty() {
                    tracing::debug!("Loaded config from {}", path.display());
                    (config, Some(path))
                } else {
                    for error in &errors {
                        tracing::warn!("Invalid config in {}: {}", path.display(), error);
                    }
                    (AppConfig::default(), None)
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

/// Values given explicitly on the command line.
///
/// `None` leaves the file (or default) value alone; `Some` always wins,
/// even when it equals the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub theme: Option<String>,
    pub mouse_enabled: Option<bool>,
    pub debounce_ms: Option<u64>,
}

impl AppConfig {
    /// Layer command-line overrides on top of this config.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(endpoint) = &overrides.endpoint {
            self.detection.endpoint.clone_from(endpoint);
        }
        if overrides.timeout_secs.is_some() {
            self.detection.timeout_secs = overrides.timeout_secs;
        }

        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(enabled) = overrides.mouse_enabled {
            self.tui.mouse_enabled = enabled;
        }
        if let Some(ms) = overrides.debounce_ms {
            self.tui.debounce_ms = ms;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    format!(
        r"# cloud-deps configuration
# Place this file at .cloud-deps.yaml in the current directory or
# ~/.config/cloud-deps/cloud-deps.yaml for a global config.
#
# CLI arguments always override file settings.
# Theme: dark, light, high-contrast
# detection.timeout_secs: omit to use the HTTP client default

{}",
        serde_yaml::to_string(&AppConfig::default()).unwrap_or_default()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_DEBOUNCE_MS, DEFAULT_ENDPOINT, DEFAULT_THEME};
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".cloud-deps.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("cloud-deps.yml"), "").unwrap();
        let dotfile = tmp.path().join(".cloud-deps.yml");
        std::fs::write(&dotfile, "").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(dotfile));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
detection:
  endpoint: https://deps.example.com/api/detect-cloud
  timeout_secs: 10
tui:
  theme: high-contrast
  mouse_enabled: false
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(
            config.detection.endpoint,
            "https://deps.example.com/api/detect-cloud"
        );
        assert_eq!(config.detection.timeout_secs, Some(10));
        assert_eq!(config.tui.theme, "high-contrast");
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.tui.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();
        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "tui: [unclosed").unwrap();
        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("invalid.yaml");
        std::fs::write(&config_path, "tui:\n  theme: neon\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().theme("light").timeout_secs(4).build();
        let overrides = ConfigOverrides {
            endpoint: Some("http://127.0.0.1:8080/detect".to_string()),
            mouse_enabled: Some(false),
            ..ConfigOverrides::default()
        };

        base.merge(&overrides);

        assert_eq!(base.detection.endpoint, "http://127.0.0.1:8080/detect");
        assert_eq!(base.detection.timeout_secs, Some(4));
        assert_eq!(base.tui.theme, "light");
        assert!(!base.tui.mouse_enabled);
    }

    #[test]
    fn test_explicit_default_values_override_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        let yaml = r"
detection:
  endpoint: https://deps.example.com/api/detect-cloud
tui:
  theme: light
  mouse_enabled: false
  debounce_ms: 900
";
        std::fs::write(&config_path, yaml).unwrap();

        let overrides = ConfigOverrides {
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            theme: Some(DEFAULT_THEME.to_string()),
            mouse_enabled: Some(true),
            debounce_ms: Some(DEFAULT_DEBOUNCE_MS),
            ..ConfigOverrides::default()
        };
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);

        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.detection.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.tui.theme, DEFAULT_THEME);
        assert!(config.tui.mouse_enabled);
        assert_eq!(config.tui.debounce_ms, DEFAULT_DEBOUNCE_MS);
    }

    #[test]
    fn test_empty_overrides_keep_file_values() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "tui:\n  debounce_ms: 900\n").unwrap();

        let (config, _) =
            AppConfig::from_file_with_overrides(Some(&config_path), &ConfigOverrides::default());
        assert_eq!(config.tui.debounce_ms, 900);
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        assert!(example.contains("detection:"));
        assert!(example.contains("endpoint"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        std::fs::write(&config_path, "tui:\n  theme: dark\n").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
