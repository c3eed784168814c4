//! Severity levels that gate which messages reach which handlers.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so loggers and handlers can compare a record's level against their threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Diagnostics too noisy for the console by default: the log file always keeps them.
    Debug = 10,
    /// Normal operational milestones: operator started, settings loaded.
    #[default]
    Info = 20,
    /// Non-fatal anomalies the user may want to know about.
    Warning = 30,
    /// An operation failed.
    Error = 40,
    /// The add-on cannot continue.
    Critical = 50,
}

impl Level {
    /// Preferences UIs start from WARNING so the console stays quiet unless something is off.
    pub const PREFERENCE_DEFAULT: Self = Self::Warning;

    /// Lowercase because config files use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }

    /// Uppercase level name as it appears in rendered log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Human-facing label for preference drop-downs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        }
    }

    /// Tooltip text for preference drop-downs.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Debug => "Debug messages (low priority)",
            Self::Info => "Informational messages",
            Self::Warning => "Warning messages (medium priority)",
            Self::Error => "Error messages (high priority)",
            Self::Critical => "Critical error messages",
        }
    }

    /// Convenience for iteration: used by preference choice lists and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl From<ParseLevelError> for crate::Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e.0)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "critical" | "fatal" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
