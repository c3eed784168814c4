//! Shared capture output for integration tests.

#![allow(dead_code)]

use addonlog::{Level, LogRecord, Logger, Output};
use std::sync::{Arc, Mutex};

/// Records every log record it receives; clones share the same buffer.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<LogRecord>>>);

impl Capture {
    pub fn records(&self) -> Vec<LogRecord> {
        self.0.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }
}

impl Output for Capture {
    fn write(&self, record: &LogRecord) -> Result<(), addonlog::Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), addonlog::Error> {
        Ok(())
    }
}

/// Logger at DEBUG with a single capture handler.
pub fn capture_logger(name: &str) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder(name)
        .output(Level::Debug, capture.clone())
        .build();
    (logger, capture)
}
