//! TOML configuration for add-ons that prefer a config file over building
//! [`SetupOptions`] in code.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig};

use crate::level::Level;
use crate::setup::SetupOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working setup: `#[serde(default)]` on every
/// field makes zero-config work.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl Config {
    /// A missing file yields defaults, so an add-on can ship without one.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns error on TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] for an unknown level name.
    pub fn console_level(&self) -> Result<Level, crate::Error> {
        Ok(self.general.console_level.parse::<Level>()?)
    }

    /// Log directory with `~` and environment variables expanded.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidPath`] when a referenced variable is undefined.
    pub fn directory(&self) -> Result<PathBuf, crate::Error> {
        let expanded = shellexpand::full(&self.file.directory)
            .map_err(|e| crate::Error::InvalidPath(e.to_string()))?;
        Ok(PathBuf::from(expanded.into_owned()))
    }

    /// # Errors
    /// Fails on an invalid level name or an unexpandable directory.
    pub fn setup_options(&self) -> Result<SetupOptions, crate::Error> {
        let mut options = SetupOptions::new(self.directory()?)
            .console_level(self.console_level()?)
            .colors(self.console.colors)
            .console_stream(self.console.stream)
            .console_structure(&self.console.structure)
            .file_structure(&self.file.structure)
            .timestamp_format(&self.file.timestamp_format);

        if let Some(name) = &self.general.name {
            options = options.name(name);
        }
        if let Some(max) = self.file.max_num_logs {
            options = options.max_num_logs(max);
        }

        Ok(options)
    }
}
