//! Console lines are tinted by severity so warnings and errors stand out in the
//! host application's system console.

use crate::level::Level;

/// Stateless: the level alone picks the escape sequence, so the same input always
/// renders identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorFormatter;

impl ColorFormatter {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    pub const CYAN: &'static str = "\x1b[1;36m";
    pub const GREEN: &'static str = "\x1b[1;32m";
    pub const YELLOW: &'static str = "\x1b[33;20m";
    pub const PURPLE: &'static str = "\x1b[1;35m";
    pub const RED: &'static str = "\x1b[31;20m";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fixed level-to-escape table; every level gets a distinct code.
    #[must_use]
    pub const fn code(level: Level) -> &'static str {
        match level {
            Level::Debug => Self::CYAN,
            Level::Info => Self::GREEN,
            Level::Warning => Self::YELLOW,
            Level::Error => Self::PURPLE,
            Level::Critical => Self::RED,
        }
    }

    /// Wraps an already rendered line in the level's escape sequence and a reset.
    #[must_use]
    pub fn format(self, level: Level, text: &str) -> String {
        let code = Self::code(level);
        let reset = Self::RESET;
        format!("{code}{text}{reset}")
    }
}
