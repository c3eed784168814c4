//! Configuration struct definitions.

use crate::fmt::FormatTemplate;
use crate::output::{FileOutput, Stream};
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logger name; the root logger when absent.
    pub name: Option<String>,
    /// Minimum level shown on the console.
    pub console_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: None,
            console_level: "info".to_string(),
        }
    }
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable colors.
    pub colors: bool,
    /// `stdout` or `stderr`.
    pub stream: Stream,
    /// Line template.
    pub structure: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            colors: true,
            stream: Stream::Stdout,
            structure: FormatTemplate::CONSOLE.to_string(),
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Log directory; `~` is expanded.
    pub directory: String,
    /// Retention count; no purge when absent. `0` is a real count, not "disabled":
    /// it removes every log file except the one just created.
    pub max_num_logs: Option<usize>,
    /// Line template.
    pub structure: String,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let directory = directories::ProjectDirs::from("", "", "addonlog").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            directory,
            max_num_logs: None,
            structure: FormatTemplate::FILE.to_string(),
            timestamp_format: FileOutput::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}
