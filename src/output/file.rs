//! Plain-text file output: the durable record a user attaches to a bug report.

use crate::fmt::{FormatTemplate, FormatValues};

use super::{LogRecord, Output, OutputKind};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File output configuration.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// Target file, created (truncated) when the output is built.
    path: PathBuf,
    /// Content structure template.
    template: FormatTemplate,
    /// Timestamp format (strftime).
    timestamp_format: String,
}

impl FileOutput {
    /// Matches the familiar `2024-05-01 13:02:11,417` style.
    pub const DEFAULT_TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S,%3f";

    /// Creates (or truncates) the file so a missing or read-only directory fails
    /// here, at setup, rather than silently on the first record.
    ///
    /// # Errors
    /// Returns the I/O error from creating the file.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, crate::Error> {
        let path = path.into();
        File::create(&path)?;

        Ok(Self {
            path,
            template: FormatTemplate::parse(FormatTemplate::FILE),
            timestamp_format: Self::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        })
    }

    /// Sets the content structure template.
    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    /// Sets the timestamp format.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Formats the content line.
    fn format_content(&self, record: &LogRecord) -> String {
        let timestamp = record.timestamp.format(&self.timestamp_format).to_string();

        let values = FormatValues::new()
            .level(record.level.name())
            .timestamp(timestamp)
            .name(&record.name)
            .location(record.location_str())
            .msg(&record.message);

        self.template.render(&values)
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;

        // Single write per record so interleaved handlers never split a line
        let mut content = self.format_content(record);
        content.push('\n');
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }

    fn kind(&self) -> OutputKind {
        OutputKind::File
    }

    fn path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
