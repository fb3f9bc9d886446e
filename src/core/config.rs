//! Configuration module for `ModuleGuide`

use crate::core::models::Language;
use crate::core::overview::DEFAULT_ELECTIVE_MARKER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Guide rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuideConfig {
    /// Language used when a guide does not name one (german, english)
    #[serde(default)]
    pub language: String,
    /// Track name that marks elective placements
    #[serde(default)]
    pub elective_marker: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Guide settings
    #[serde(default)]
    pub guide: GuideConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override fallback language
    pub language: Option<String>,
    /// Override elective marker
    pub elective_marker: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$MODULE_GUIDE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/moduleguide`
    /// - macOS: `~/Library/Application Support/moduleguide`
    /// - Windows: `%APPDATA%\moduleguide`
    #[must_use]
    pub fn get_moduleguide_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moduleguide")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty in the current config and non-empty in
    /// defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;
        for (field, default) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.guide.language, &defaults.guide.language),
            (&mut self.guide.elective_marker, &defaults.guide.elective_marker),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ] {
            if field.is_empty() && !default.is_empty() {
                field.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file itself
    /// is left untouched.
    ///
    /// # Arguments
    ///
    /// * `overrides` - A `ConfigOverrides` struct with optional override values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(language) = &overrides.language {
            self.guide.language.clone_from(language);
        }
        if let Some(marker) = &overrides.elective_marker {
            self.guide.elective_marker.clone_from(marker);
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    ///
    /// The file is located in the directory returned by [`get_moduleguide_dir`].
    ///
    /// [`get_moduleguide_dir`]: Self::get_moduleguide_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_moduleguide_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$MODULE_GUIDE` to the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$MODULE_GUIDE") {
            let dir = Self::get_moduleguide_dir();
            value.replace("$MODULE_GUIDE", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$MODULE_GUIDE`
    /// variables in path values. Missing fields use their serde defaults.
    ///
    /// # Arguments
    ///
    /// * `toml_str` - A TOML-formatted configuration string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$MODULE_GUIDE/moduleguide.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultCLIConfigDebug.toml`
    /// - Release: Uses `DefaultCLIConfigRelease.toml`
    ///
    /// Falls back to an empty config with the built-in elective marker if the
    /// embedded file cannot be parsed.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).unwrap_or_else(|_| Self {
            guide: GuideConfig {
                language: Language::default().to_string(),
                elective_marker: DEFAULT_ELECTIVE_MARKER.to_string(),
            },
            ..Self::default()
        })
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults and saves the updated config
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// # Returns
    /// A `Config` instance loaded from file or defaults. Falls back to defaults if any error occurs
    /// during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// The saved file will use the format:
    /// ```toml
    /// [logging]
    /// level = "info"
    /// file = "$MODULE_GUIDE/moduleguide.log"
    /// verbose = false
    ///
    /// [guide]
    /// language = "german"
    /// elective_marker = "Wahlpflicht"
    ///
    /// [paths]
    /// reports_dir = "$MODULE_GUIDE/reports"
    /// ```
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `language`: Fallback guide language
    /// - `elective_marker`: Track name of the elective track
    /// - `reports_dir`: Reports output directory path
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "language" => Some(self.guide.language.clone()),
            "elective_marker" | "elective-marker" => Some(self.guide.elective_marker.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Arguments
    /// - `key`: The configuration key to set
    /// - `value`: The new value as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key is not recognized
    /// - `verbose` is not a boolean
    /// - `language` is not a known language
    /// - `elective_marker` is empty
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "language" => {
                let language: Language = value.parse()?;
                self.guide.language = language.to_string();
            }
            "elective_marker" | "elective-marker" => {
                if value.trim().is_empty() {
                    return Err("Elective marker must not be empty".to_string());
                }
                self.guide.elective_marker = value.to_string();
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "language" => self.guide.language.clone_from(&defaults.guide.language),
            "elective_marker" | "elective-marker" => self
                .guide
                .elective_marker
                .clone_from(&defaults.guide.elective_marker),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next [`load()`](Config::load) call to
    /// recreate it from defaults. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Fallback guide language
    ///
    /// Unknown or empty values fall back to German.
    #[must_use]
    pub fn language(&self) -> Language {
        self.guide.language.parse().unwrap_or_default()
    }

    /// Elective marker, or the built-in one when unset
    #[must_use]
    pub fn elective_marker(&self) -> &str {
        if self.guide.elective_marker.is_empty() {
            DEFAULT_ELECTIVE_MARKER
        } else {
            &self.guide.elective_marker
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[guide]")?;
        writeln!(f, "  language = \"{}\"", self.guide.language)?;
        writeln!(f, "  elective_marker = \"{}\"", self.guide.elective_marker)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}
