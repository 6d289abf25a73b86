//! Configuration file management.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use super::parser::parse_ini;
use super::settings::ConfigFile;
use super::writer::to_config_string;

/// Errors from configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Could not read or parse the INI file.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Could not write the config file.
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// A key held a value that cannot be used.
    #[error("Invalid value for [{section}] {key}: '{value}' ({reason})")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// The config directory could not be created.
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// Directory holding configuration and runtime state (`~/.launchgate`).
///
/// Falls back to the current directory when no home is available.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".launchgate")
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

impl ConfigFile {
    /// Load configuration from the default path.
    ///
    /// A missing file yields the defaults; a present but unreadable or
    /// invalid file is an error.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }
        std::fs::write(path, to_config_string(self))
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))?;
        Ok(())
    }

    /// Write a default config file if none exists yet.
    ///
    /// Returns the config file path either way.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }
}
