//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`ValidationOptions`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`DNSGATE_VALIDATION__ALL_ERRORS=true`)
//! 3. Config file (`--config <FILE>` or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use dnsgate_core::application::{DEFAULT_EXTENSIONS, ValidationOptions};

use crate::error::{CliError, CliResult};

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "DNSGATE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Validation settings.
    pub validation: ValidationConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report every violation per resource.
    pub all_errors: bool,
    /// File extensions read when a directory is given.
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Default report format for `validate` (`table` or `json`).
    pub format: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            all_errors: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "table".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// file must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let path = config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);
        debug!(path = %path.display(), explicit = config_file.is_some(), "Loading configuration");

        // Missing keys fall back to `Default` through `#[serde(default)]`.
        Config::builder()
            .add_source(File::from(path).required(config_file.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("validation.extensions"),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dnsgate.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "dnsgate", "dnsgate")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dnsgate.toml"))
    }

    /// Options for the validation service; `force_all_errors` comes from
    /// the `--all-errors` flag.
    pub fn validation_options(&self, force_all_errors: bool) -> ValidationOptions {
        ValidationOptions {
            all_errors: force_all_errors || self.validation.all_errors,
            extensions: self.validation.extensions.clone(),
        }
    }

    /// Look up a value by dotted key, rendered for display.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "validation.all_errors" => Ok(self.validation.all_errors.to_string()),
            "validation.extensions" => Ok(self.validation.extensions.join(",")),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }

    /// Serialise as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert!(!cfg.validation.all_errors);
        assert_eq!(cfg.validation.extensions, ["yaml", "yml", "json"]);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "table");
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dnsgate.toml");
        fs::write(
            &path,
            "[validation]\nall_errors = true\nextensions = [\"yaml\"]\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.validation.all_errors);
        assert_eq!(cfg.validation.extensions, ["yaml"]);
        // untouched sections keep their defaults
        assert_eq!(cfg.output.format, "table");
    }

    #[test]
    fn explicit_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[validation\n").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn flag_forces_all_errors() {
        let cfg = AppConfig::default();
        assert!(!cfg.validation_options(false).all_errors);
        assert!(cfg.validation_options(true).all_errors);
        assert_eq!(cfg.validation_options(false).extensions, cfg.validation.extensions);
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("validation.all_errors").unwrap(), "false");
        assert_eq!(cfg.get("validation.extensions").unwrap(), "yaml,yml,json");
        assert_eq!(cfg.get("output.format").unwrap(), "table");
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn toml_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
