//! The two built-in handlers (console, file) can't cover every host: the `Output`
//! trait lets an add-on attach its own sink (an in-app log panel, a test capture)
//! without modifying addonlog itself.

mod console;
mod file;

pub use console::{ConsoleOutput, Stream};
pub use file::FileOutput;

use crate::level::Level;
use chrono::{DateTime, Local};
use std::panic::Location;
use std::path::Path;

/// Carries all data a handler needs to render one log line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Name of the logger that produced the record.
    pub name: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    /// Where the logging call was made, captured through `#[track_caller]`.
    pub location: &'static Location<'static>,
}

impl LogRecord {
    /// Stamps the record with the current local time.
    #[must_use]
    pub fn new(
        level: Level,
        name: impl Into<String>,
        message: impl Into<String>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            level,
            name: name.into(),
            message: message.into(),
            timestamp: Local::now(),
            location,
        }
    }

    /// `file:line` of the logging call.
    #[must_use]
    pub fn location_str(&self) -> String {
        format!("{}:{}", self.location.file(), self.location.line())
    }
}

/// Lets the logger find its console handlers (level preference) and file handlers (log path)
/// without downcasting trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Console,
    File,
    Custom,
}

/// `Send + Sync` so a logger can be shared by reference with background helpers of the host.
pub trait Output: Send + Sync {
    /// Each handler renders the record according to its own format.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;

    fn kind(&self) -> OutputKind {
        OutputKind::Custom
    }

    /// File-backed handlers expose where they write so the host can offer an "open log" action.
    fn path(&self) -> Option<&Path> {
        None
    }
}
