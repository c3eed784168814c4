//! A named logger holding a threshold and an ordered list of handlers. Each record
//! is filtered by the logger's threshold, then fanned out to every handler whose own
//! threshold it meets.

mod builder;

pub use builder::{ConsoleBuilder, LoggerBuilder};

use crate::level::Level;
use crate::output::{LogRecord, Output, OutputKind};
use std::panic::Location;
use std::path::Path;

/// An output sink plus the minimum level it accepts.
pub struct Handler {
    min_level: Level,
    output: Box<dyn Output>,
}

impl Handler {
    #[must_use]
    pub fn new(min_level: Level, output: impl Output + 'static) -> Self {
        Self {
            min_level,
            output: Box::new(output),
        }
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn kind(&self) -> OutputKind {
        self.output.kind()
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.output.path()
    }
}

pub struct Logger {
    name: String,
    min_level: Level,
    handlers: Vec<Handler>,
}

impl Logger {
    /// A bare logger with no handlers; records are dropped until one is attached.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: Level::Info,
            handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Core dispatch: filters by the logger threshold, then by each handler's own.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str) {
        if !self.is_enabled_for(level) {
            return;
        }

        let record = LogRecord::new(level, self.name.as_str(), msg, Location::caller());

        for handler in &self.handlers {
            if record.level >= handler.min_level {
                let _ = handler.output.write(&record);
            }
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    #[track_caller]
    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    #[track_caller]
    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    #[track_caller]
    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    #[track_caller]
    pub fn critical(&self, msg: &str) {
        self.log(Level::Critical, msg);
    }

    /// Lets callers skip building expensive messages that would be filtered anyway.
    #[must_use]
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Handlers are appended, never replaced: attaching twice duplicates output.
    pub fn add_handler(&mut self, min_level: Level, output: impl Output + 'static) {
        self.handlers.push(Handler::new(min_level, output));
    }

    /// Flushes and detaches every handler, newest first. Returns how many were removed.
    pub fn clear_handlers(&mut self) -> usize {
        let count = self.handlers.len();
        while let Some(handler) = self.handlers.pop() {
            let _ = handler.output.flush();
        }
        count
    }

    pub const fn set_level(&mut self, level: Level) {
        self.min_level = level;
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Console verbosity is a user preference; file handlers keep logging everything.
    /// The logger threshold is lowered when needed so the console is not starved.
    pub fn set_console_level(&mut self, level: Level) {
        for handler in &mut self.handlers {
            if handler.kind() == OutputKind::Console {
                handler.min_level = level;
            }
        }
        if level < self.min_level {
            self.min_level = level;
        }
    }

    #[must_use]
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Path of the most recently attached file handler, if any.
    #[must_use]
    pub fn log_file_path(&self) -> Option<&Path> {
        self.handlers
            .iter()
            .rev()
            .filter(|h| h.kind() == OutputKind::File)
            .find_map(Handler::path)
    }

    /// # Errors
    /// Returns the first I/O error encountered across all handlers.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for handler in &self.handlers {
            handler.output.flush()?;
        }
        Ok(())
    }
}
