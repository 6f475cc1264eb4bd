//! Application configuration loaded from a settings file and environment variables.
//!
//! Configuration is loaded once at startup and validated before the logger is built.
//!
//! ## Settings file
//!
//! ```json
//! {
//!   "LogOptions": {
//!     "IsLogEnabled": true
//!   }
//! }
//! ```
//!
//! The file is read from `APPSETTINGS_PATH` (default: `appsettings.json`).
//! A missing file at the default path is fine; a missing file at an explicit
//! path is an error.
//!
//! ## Optional Variables
//!
//! - `LOG_ENABLED` - Overrides `LogOptions.IsLogEnabled` (`true`/`1`/`false`/`0`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SETTINGS_PATH: &str = "appsettings.json";

/// Options that gate informational logging of reversals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LogOptions {
    #[serde(rename = "IsLogEnabled", default)]
    pub is_log_enabled: bool,
}

/// Shape of the settings file.
#[derive(Debug, Default, Deserialize)]
struct AppSettings {
    #[serde(rename = "LogOptions", default)]
    log_options: LogOptions,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_options: LogOptions,
    pub log_level: String,
    pub log_format: String,
    /// Settings file that was actually read, if any.
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the settings file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly configured settings file is missing,
    /// the settings file is not valid JSON, or `LOG_ENABLED` is not a boolean.
    pub fn from_env() -> Result<Self> {
        let (settings, settings_path) = Self::load_settings()?;

        let mut log_options = settings.log_options;
        if let Ok(raw) = env::var("LOG_ENABLED") {
            log_options.is_log_enabled = parse_bool(&raw)
                .with_context(|| format!("LOG_ENABLED must be a boolean, got '{}'", raw))?;
        }

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            log_options,
            log_level,
            log_format,
            settings_path,
        })
    }

    /// Reads the settings file.
    ///
    /// Priority:
    /// 1. `APPSETTINGS_PATH` (must exist)
    /// 2. `appsettings.json` in the working directory (optional)
    fn load_settings() -> Result<(AppSettings, Option<PathBuf>)> {
        if let Ok(path) = env::var("APPSETTINGS_PATH") {
            let path = PathBuf::from(path);
            let settings = read_settings(&path)?;
            return Ok((settings, Some(path)));
        }

        let path = PathBuf::from(DEFAULT_SETTINGS_PATH);
        if !path.exists() {
            return Ok((AppSettings::default(), None));
        }

        let settings = read_settings(&path)?;
        Ok((settings, Some(path)))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_format` is not `text` or `json`.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Applies the `--log-enabled` command-line flag.
    ///
    /// A flag given on the command line wins over `LOG_ENABLED` and the
    /// settings file; `None` leaves the loaded value untouched.
    pub fn apply_cli_override(&mut self, log_enabled: Option<bool>) {
        if let Some(enabled) = log_enabled {
            self.log_options.is_log_enabled = enabled;
        }
    }

    /// Logs configuration summary at `DEBUG`.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        match self.settings_path {
            Some(ref path) => tracing::debug!("  Settings file: {}", path.display()),
            None => tracing::debug!("  Settings file: none"),
        }
        tracing::debug!("  Log enabled: {}", self.log_options.is_log_enabled);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

fn read_settings(path: &Path) -> Result<AppSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid settings file {}", path.display()))
}

fn parse_bool(raw: &str) -> Result<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Ok(false)
    } else {
        anyhow::bail!("not a boolean: '{}'", raw)
    }
}

/// Loads and validates configuration.
///
/// # Errors
///
/// Returns an error if loading or validation fails.
///
/// # Note
///
/// This function expects a `.env` file, if any, to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
