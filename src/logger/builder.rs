//! Stepwise construction of a `Logger`: the console has enough knobs to warrant
//! its own sub-builder, other outputs are attached ready-made.

use super::{Handler, Logger};
use crate::level::Level;
use crate::output::{ConsoleOutput, Output, Stream};

pub struct LoggerBuilder {
    name: String,
    min_level: Option<Level>,
    handlers: Vec<Handler>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: None,
            handlers: Vec::new(),
        }
    }

    /// Explicit logger threshold. Without it, the built logger takes the most
    /// permissive handler threshold so no handler is starved.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder {
            parent: self,
            output: ConsoleOutput::new(),
            level: Level::Info,
        }
    }

    #[must_use]
    pub fn output(mut self, min_level: Level, output: impl Output + 'static) -> Self {
        self.handlers.push(Handler::new(min_level, output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let min_level = self
            .min_level
            .or_else(|| self.handlers.iter().map(Handler::min_level).min())
            .unwrap_or_default();

        Logger {
            name: self.name,
            min_level,
            handlers: self.handlers,
        }
    }
}

pub struct ConsoleBuilder {
    parent: LoggerBuilder,
    output: ConsoleOutput,
    level: Level,
}

impl ConsoleBuilder {
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Redirected consoles break on ANSI escape codes.
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    #[must_use]
    pub fn stream(mut self, stream: Stream) -> Self {
        self.output = self.output.stream(stream);
        self
    }

    #[must_use]
    pub fn structure(mut self, template: &str) -> Self {
        self.output = self.output.template(template);
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more outputs.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.handlers.push(Handler::new(self.level, self.output));
        self.parent
    }
}
