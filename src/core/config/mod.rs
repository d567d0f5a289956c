//! core::config
//!
//! Configuration schema and persistence.
//!
//! # Location
//!
//! The config file path is resolved in order:
//! 1. An explicit path (the `--config` CLI flag)
//! 2. `$AI_FLAGS_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/ai-flags/config.yaml` if `XDG_CONFIG_HOME` is set
//! 4. `~/.config/ai-flags/config.yaml`
//!
//! # Failure Policy
//!
//! Loading never fails. A missing, empty, unreadable, or malformed file
//! resolves to [`FlagsConfig::default`] (every flag enabled, no custom
//! content), with a [`ConfigWarning`] describing what was skipped. A broken
//! config file must not stop prompts from reaching the assistant.
//!
//! Saving and resetting do report errors, since they are explicit user
//! actions.
//!
//! # Example
//!
//! ```no_run
//! use ai_flags::core::config::ConfigFile;
//! use ai_flags::core::flag::Flag;
//!
//! let file = ConfigFile::locate(None).unwrap();
//! let mut config = file.load().config;
//! config.get_mut(Flag::Commit).enabled = false;
//! file.save(&config).unwrap();
//! ```

pub mod schema;

pub use schema::{FlagConfig, FlagSettings, FlagsConfig};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "AI_FLAGS_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    SerializeError(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration, or defaults.
    pub config: FlagsConfig,
    /// Whether the file existed and was used.
    pub from_file: bool,
    /// Problems that caused the file to be ignored.
    pub warnings: Vec<ConfigWarning>,
}

/// Handle to the YAML config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Use a specific path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the config path from an explicit override, the environment,
    /// or the home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if nothing else applies and the home
    /// directory cannot be determined.
    pub fn locate(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Ok(Self::at(path));
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::at(path));
        }

        if let Some(xdg_home) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return Ok(Self::at(
                PathBuf::from(xdg_home).join("ai-flags/config.yaml"),
            ));
        }

        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::at(home.join(".config/ai-flags/config.yaml")))
    }

    /// Path of the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load configuration, falling back to defaults on any problem.
    pub fn load(&self) -> ConfigLoadResult {
        match self.try_load() {
            Ok(Some(config)) => {
                tracing::debug!(path = %self.path.display(), "loaded config");
                ConfigLoadResult {
                    config,
                    from_file: true,
                    warnings: Vec::new(),
                }
            }
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no config file, using defaults");
                ConfigLoadResult {
                    config: FlagsConfig::default(),
                    from_file: false,
                    warnings: Vec::new(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring config file, using defaults");
                ConfigLoadResult {
                    config: FlagsConfig::default(),
                    from_file: false,
                    warnings: vec![ConfigWarning {
                        message: format!("{}; using default configuration", err),
                        path: self.path.clone(),
                    }],
                }
            }
        }
    }

    /// Load configuration strictly.
    ///
    /// Returns `Ok(None)` when the file does not exist or holds no document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<Option<FlagsConfig>, ConfigError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(None);
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(&contents).map_err(|e| self.parse_error(e))?;
        if value.is_null() {
            return Ok(None);
        }

        serde_yaml::from_value(value)
            .map(Some)
            .map_err(|e| self.parse_error(e))
    }

    /// Write configuration atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn save(&self, config: &FlagsConfig) -> Result<(), ConfigError> {
        let path = self.path.as_path();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            serde_yaml::to_string(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        let temp_path = path.with_extension("yaml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Overwrite the file with the default configuration and return it.
    pub fn reset(&self) -> Result<FlagsConfig, ConfigError> {
        let config = FlagsConfig::default();
        self.save(&config)?;
        Ok(config)
    }

    fn parse_error(&self, err: serde_yaml::Error) -> ConfigError {
        ConfigError::ParseError {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flag::Flag;
    use tempfile::TempDir;

    fn config_in(temp: &TempDir) -> ConfigFile {
        ConfigFile::at(temp.path().join("config.yaml"))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let result = config_in(&temp).load();

        assert_eq!(result.config, FlagsConfig::default());
        assert!(!result.from_file);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);
        fs::write(
            file.path(),
            "subagent:\n  enabled: false\n  content: null\ncommit:\n  enabled: true\n  content: Custom\n",
        )
        .unwrap();

        let result = file.load();
        assert!(result.from_file);
        assert!(!result.config.subagent.enabled);
        assert_eq!(result.config.commit.content.as_deref(), Some("Custom"));
        assert!(result.config.debug.enabled);
    }

    #[test]
    fn malformed_yaml_falls_back_with_warning() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);
        fs::write(file.path(), "invalid: yaml: content:").unwrap();

        let result = file.load();
        assert_eq!(result.config, FlagsConfig::default());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].message.contains("failed to parse"));
        assert!(file.try_load().is_err());
    }

    #[test]
    fn wrong_value_types_fall_back() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);
        fs::write(file.path(), "commit:\n  enabled: [1, 2]\n").unwrap();

        let result = file.load();
        assert_eq!(result.config, FlagsConfig::default());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn empty_and_null_documents_use_defaults() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);

        for contents in ["", "   \n", "~\n", "null\n"] {
            fs::write(file.path(), contents).unwrap();
            let result = file.load();
            assert_eq!(result.config, FlagsConfig::default(), "contents {:?}", contents);
            assert!(result.warnings.is_empty());
        }
    }

    #[test]
    fn save_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let file = ConfigFile::at(temp.path().join("deep/nested/config.yaml"));

        file.save(&FlagsConfig::default()).unwrap();

        assert!(file.path().exists());
        assert!(!file.path().with_extension("yaml.tmp").exists());
    }

    #[test]
    fn save_load_cycle_preserves_fields() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);

        let mut config = FlagsConfig::default();
        config.subagent.enabled = false;
        config.commit.content = Some("Custom commit message".to_string());
        config.test.enabled = false;
        file.save(&config).unwrap();

        let loaded = file.load().config;
        assert_eq!(loaded, config);

        let mut second = loaded.clone();
        second.get_mut(Flag::Debug).enabled = false;
        file.save(&second).unwrap();

        let reloaded = file.load().config;
        assert!(!reloaded.test.enabled);
        assert!(!reloaded.debug.enabled);
    }

    #[test]
    fn saved_file_is_readable_yaml() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);

        let mut config = FlagsConfig::default();
        config.commit.enabled = false;
        file.save(&config).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("commit:"));
        assert!(contents.contains("enabled: false"));
        assert!(!contents.starts_with('{'));
    }

    #[test]
    fn reset_restores_defaults() {
        let temp = TempDir::new().unwrap();
        let file = config_in(&temp);

        let mut config = FlagsConfig::default();
        config.subagent.enabled = false;
        config.commit.content = Some("Custom content".to_string());
        file.save(&config).unwrap();

        let returned = file.reset().unwrap();
        assert_eq!(returned, FlagsConfig::default());

        let loaded = file.load().config;
        assert!(loaded.subagent.enabled);
        assert!(loaded.commit.content.is_none());
    }

    #[test]
    fn explicit_path_wins() {
        let file = ConfigFile::locate(Some(Path::new("/tmp/custom.yaml"))).unwrap();
        assert_eq!(file.path(), Path::new("/tmp/custom.yaml"));
    }
}
