//! One-call logger setup for an add-on: a fresh timestamped log file plus a
//! colorized console, attached to a named logger in the caller's [`LogContext`].

use crate::context::LogContext;
use crate::fmt::FormatTemplate;
use crate::level::Level;
use crate::output::{ConsoleOutput, FileOutput, Stream};
use crate::purge::{PurgeOptions, log_file_name, purge_old_logs};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Everything `setup_logger` needs. Only the directory is mandatory.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Logger name; the root logger when `None`.
    pub name: Option<String>,
    /// Must already exist.
    pub directory: PathBuf,
    /// Minimum level shown on the console. The file always receives every level.
    pub console_level: Level,
    pub colors: bool,
    pub console_stream: Stream,
    pub console_structure: String,
    pub file_structure: String,
    pub timestamp_format: String,
    /// Purge older log files after the new one is created.
    pub max_num_logs: Option<usize>,
}

impl SetupOptions {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            directory: directory.into(),
            console_level: Level::Info,
            colors: true,
            console_stream: Stream::Stdout,
            console_structure: FormatTemplate::CONSOLE.to_string(),
            file_structure: FormatTemplate::FILE.to_string(),
            timestamp_format: FileOutput::DEFAULT_TIMESTAMP_FORMAT.to_string(),
            max_num_logs: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub const fn console_stream(mut self, stream: Stream) -> Self {
        self.console_stream = stream;
        self
    }

    #[must_use]
    pub fn console_structure(mut self, template: impl Into<String>) -> Self {
        self.console_structure = template.into();
        self
    }

    #[must_use]
    pub fn file_structure(mut self, template: impl Into<String>) -> Self {
        self.file_structure = template.into();
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub const fn max_num_logs(mut self, max: usize) -> Self {
        self.max_num_logs = Some(max);
        self
    }
}

/// Creates a new log file in `options.directory` and attaches a file handler
/// (every level) and a console handler (`options.console_level`) to the named
/// logger. Returns the new file's path.
///
/// Handlers are appended: calling this twice for the same name without
/// [`teardown_logger`] in between sends every record to both pairs.
///
/// # Errors
/// [`crate::Error::DirectoryNotFound`] when the directory does not exist, or the
/// I/O error from creating the log file.
pub fn setup_logger(ctx: &mut LogContext, options: &SetupOptions) -> Result<PathBuf, crate::Error> {
    if !options.directory.is_dir() {
        return Err(crate::Error::DirectoryNotFound(options.directory.clone()));
    }

    let path = options.directory.join(log_file_name(Local::now()));

    let file = FileOutput::create(&path)?
        .template(&options.file_structure)
        .timestamp_format(&options.timestamp_format);
    let console = ConsoleOutput::new()
        .colors(options.colors)
        .stream(options.console_stream)
        .template(&options.console_structure);

    let logger = ctx.logger(options.name.as_deref());
    logger.add_handler(options.console_level, console);
    logger.add_handler(Level::Debug, file);
    logger.set_level(Level::Debug.min(options.console_level));

    logger.debug(&format!("Logging to {}", path.display()));

    if let Some(max) = options.max_num_logs {
        let purge = PurgeOptions::new(max).protect(&path);
        match purge_old_logs(&options.directory, &purge) {
            Ok(result) => result.log(logger),
            Err(e) => logger.warning(&format!("Log purge skipped: {e}")),
        }
    }

    Ok(path)
}

/// Flushes and removes every handler of the named logger. Returns how many were removed.
pub fn teardown_logger(ctx: &mut LogContext, name: Option<&str>) -> usize {
    ctx.get_mut(name).map_or(0, crate::logger::Logger::clear_handlers)
}

/// Path of the file the named logger currently writes to.
#[must_use]
pub fn get_log_filepath(ctx: &LogContext, name: Option<&str>) -> Option<PathBuf> {
    ctx.get(name)
        .and_then(crate::logger::Logger::log_file_path)
        .map(Path::to_path_buf)
}
