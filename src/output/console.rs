//! Console output: what the user sees in the host application's system console.

use crate::fmt::{ColorFormatter, FormatTemplate, FormatValues};

use super::{LogRecord, Output, OutputKind};
use serde::Deserialize;
use std::io::{self, Write};

/// Which standard stream console lines go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// All console rendering state in one struct.
#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    /// Redirected consoles and CI logs can't render ANSI escape codes.
    colors_enabled: bool,
    formatter: ColorFormatter,
    template: FormatTemplate,
    stream: Stream,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors_enabled: true,
            formatter: ColorFormatter::new(),
            template: FormatTemplate::parse(FormatTemplate::CONSOLE),
            stream: Stream::Stdout,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn template(mut self, template: &str) -> Self {
        self.template = FormatTemplate::parse(template);
        self
    }

    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    /// Renders the template, then tints the whole line by level.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> String {
        let values = FormatValues::new()
            .level(record.level.name())
            .name(&record.name)
            .location(record.location_str())
            .msg(&record.message);

        let line = self.template.render(&values);
        if self.colors_enabled {
            self.formatter.format(record.level, &line)
        } else {
            line
        }
    }
}

impl Output for ConsoleOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let formatted = self.format_record(record);
        match self.stream {
            Stream::Stdout => writeln!(io::stdout(), "{formatted}")?,
            Stream::Stderr => writeln!(io::stderr(), "{formatted}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn kind(&self) -> OutputKind {
        OutputKind::Console
    }
}
