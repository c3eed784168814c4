//! `addonlog` - Logging helpers for host-application plugins and add-ons.
//!
//! - A rotating set of timestamped log files plus a colorized console
//! - Retention: old log files beyond a count are purged
//! - Operator execution logging with timing and outcome
//! - Report-and-log: one call reaches both the log and the user
//! - Settings dumps and property-change callbacks
//!
//! # Example
//!
//! ```no_run
//! use addonlog::{Level, LogContext, SetupOptions, setup_logger};
//!
//! let mut ctx = LogContext::new();
//! let options = SetupOptions::new("/tmp/my_addon/logs")
//!     .name("my_addon")
//!     .console_level(Level::Warning)
//!     .max_num_logs(30);
//! let path = setup_logger(&mut ctx, &options)?;
//!
//! let log = ctx.logger(Some("my_addon"));
//! log.info("Add-on registered");
//! log.debug(&format!("Logging to {}", path.display()));
//! # Ok::<(), addonlog::Error>(())
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod execution;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod output;
pub mod purge;
pub mod report;
pub mod settings;
pub mod setup;

// Re-exports for convenience
pub use config::Config;
pub use context::{LogContext, ROOT_LOGGER};
pub use error::Error;
pub use execution::{Operator, log_execution, redact_paths};
pub use fmt::ColorFormatter;
pub use level::Level;
pub use logger::{Handler, Logger, LoggerBuilder};
pub use output::{ConsoleOutput, FileOutput, LogRecord, Output, OutputKind, Stream};
pub use purge::{PurgeOptions, PurgeResult, purge_old_logs};
pub use report::{ReportKind, Reporter, format_message, report_and_log};
pub use settings::{Describable, Setting, SettingValue, log_setting_changed, log_settings};
pub use setup::{SetupOptions, get_log_filepath, setup_logger, teardown_logger};
