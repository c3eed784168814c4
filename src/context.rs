//! Named loggers live in an explicit context value that the add-on creates once and
//! passes to whatever needs to log, instead of a process-wide registry.

use crate::logger::Logger;
use std::collections::HashMap;

/// Name used when setup or lookup is called without one.
pub const ROOT_LOGGER: &str = "root";

/// One logger per name; asking for the same name twice yields the same logger.
#[derive(Default)]
pub struct LogContext {
    loggers: HashMap<String, Logger>,
}

impl LogContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: Option<&str>) -> &str {
        name.unwrap_or(ROOT_LOGGER)
    }

    /// Returns the named logger, creating a handler-less one on first use.
    pub fn logger(&mut self, name: Option<&str>) -> &mut Logger {
        let key = Self::key(name);
        self.loggers
            .entry(key.to_string())
            .or_insert_with(|| Logger::new(key))
    }

    #[must_use]
    pub fn get(&self, name: Option<&str>) -> Option<&Logger> {
        self.loggers.get(Self::key(name))
    }

    pub fn get_mut(&mut self, name: Option<&str>) -> Option<&mut Logger> {
        self.loggers.get_mut(Self::key(name))
    }

    /// Installs a fully built logger under its own name, replacing any previous one.
    pub fn insert(&mut self, logger: Logger) -> Option<Logger> {
        self.loggers.insert(logger.name().to_string(), logger)
    }

    pub fn remove(&mut self, name: Option<&str>) -> Option<Logger> {
        self.loggers.remove(Self::key(name))
    }

    #[must_use]
    pub fn contains(&self, name: Option<&str>) -> bool {
        self.loggers.contains_key(Self::key(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}
