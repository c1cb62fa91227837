//! Configuration module for `advising`

use crate::core::eligibility::{EvaluationOptions, StatusVocabulary};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory inside config values
const DIR_VARIABLE: &str = "$ADVISING";

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

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for eligibility reports written by `sweep`
    #[serde(default)]
    pub reports_dir: String,
}

/// Eligibility evaluation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Status code vocabulary used by the student records (`grades` or `simple`)
    #[serde(default)]
    pub status_vocabulary: String,
    /// Evaluate courses even when they are flagged as not offered
    #[serde(default)]
    pub ignore_offered: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Eligibility settings
    #[serde(default)]
    pub eligibility: EligibilityConfig,
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
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override status vocabulary
    pub status_vocabulary: Option<String>,
    /// Override the offered-flag check
    pub ignore_offered: Option<bool>,
}

impl Config {
    /// Get the `$ADVISING` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/advising`
    /// - macOS: `~/Library/Application Support/advising`
    /// - Windows: `%APPDATA%\advising`
    #[must_use]
    pub fn get_advising_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("advising")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so upgrading picks up new keys without touching user settings.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.eligibility.status_vocabulary.is_empty()
            && !defaults.eligibility.status_vocabulary.is_empty()
        {
            self.eligibility
                .status_vocabulary
                .clone_from(&defaults.eligibility.status_vocabulary);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides only affect this run; nothing is written back to disk.
    /// Only non-`None` values replace config values.
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

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }

        if let Some(vocabulary) = &overrides.status_vocabulary {
            self.eligibility.status_vocabulary.clone_from(vocabulary);
        }
        if let Some(ignore_offered) = overrides.ignore_offered {
            self.eligibility.ignore_offered = ignore_offered;
        }
    }

    /// Copy of this config with CLI overrides applied
    ///
    /// The receiver stays as loaded from disk, so it is the one to hand to
    /// `set`/`unset` + [`save()`](Config::save).
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Build the evaluator options described by the `[eligibility]` section
    ///
    /// An empty or unrecognized vocabulary falls back to the letter-grade set.
    #[must_use]
    pub fn evaluation_options(&self) -> EvaluationOptions {
        let vocabulary = self
            .eligibility
            .status_vocabulary
            .parse::<StatusVocabulary>()
            .unwrap_or_default();
        EvaluationOptions::new()
            .with_vocabulary(vocabulary)
            .with_ignore_offered(self.eligibility.ignore_offered)
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_advising_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$ADVISING` in a config value to the actual config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let advising_dir = Self::get_advising_dir();
            value.replace(DIR_VARIABLE, advising_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$ADVISING` is expanded in
    /// path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults and saves the result when anything was added.
    /// - On first run: creates the config directory and writes the defaults.
    ///
    /// Falls back to defaults if the existing file cannot be read or parsed.
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

    /// Save configuration to the platform-specific config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
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
    /// Supported keys: `level`, `file`, `verbose`, `reports_dir`,
    /// `status_vocabulary`, `ignore_offered` (dashes accepted in place of
    /// underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "status_vocabulary" | "status-vocabulary" => {
                Some(self.eligibility.status_vocabulary.clone())
            }
            "ignore_offered" | "ignore-offered" => {
                Some(self.eligibility.ignore_offered.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Only updates the in-memory config. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value does not
    /// parse (booleans, log levels, status vocabularies are validated).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level = value
                    .parse::<crate::logger::Level>()
                    .map_err(|e| format!("Invalid value for 'level': {e}"))?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool("verbose", value)?,
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "status_vocabulary" | "status-vocabulary" => {
                let vocabulary = value.parse::<StatusVocabulary>()?;
                self.eligibility.status_vocabulary = vocabulary.to_string();
            }
            "ignore_offered" | "ignore-offered" => {
                self.eligibility.ignore_offered = parse_bool("ignore_offered", value)?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// Only updates the in-memory config. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "status_vocabulary" | "status-vocabulary" => self
                .eligibility
                .status_vocabulary
                .clone_from(&defaults.eligibility.status_vocabulary),
            "ignore_offered" | "ignore-offered" => {
                self.eligibility.ignore_offered = defaults.eligibility.ignore_offered;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds if the file
    /// does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[eligibility]")?;
        writeln!(
            f,
            "  status_vocabulary = \"{}\"",
            self.eligibility.status_vocabulary
        )?;
        writeln!(f, "  ignore_offered = {}", self.eligibility.ignore_offered)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_bad_vocabulary() {
        let mut config = Config::from_defaults();
        assert!(config.set("status_vocabulary", "roman").is_err());
        config
            .set("status-vocabulary", "SIMPLE")
            .expect("simple vocabulary should be accepted");
        assert_eq!(config.eligibility.status_vocabulary, "simple");
    }

    #[test]
    fn test_set_normalizes_level() {
        let mut config = Config::from_defaults();
        config.set("level", "WARNING").expect("warning is a valid level");
        assert_eq!(config.logging.level, "warn");
        assert!(config.set("level", "loud").is_err());
    }

    #[test]
    fn test_evaluation_options_follow_config() {
        let mut config = Config::from_defaults();
        config.eligibility.status_vocabulary = "simple".to_string();
        config.eligibility.ignore_offered = true;

        let options = config.evaluation_options();
        assert_eq!(options.vocabulary, StatusVocabulary::Simple);
        assert!(options.ignore_offered);
    }

    #[test]
    fn test_unknown_vocabulary_falls_back_to_grades() {
        let mut config = Config::from_defaults();
        config.eligibility.status_vocabulary = "whatever".to_string();
        assert_eq!(
            config.evaluation_options().vocabulary,
            StatusVocabulary::Grades
        );
    }
}
