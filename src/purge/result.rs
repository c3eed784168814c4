//! Outcome of a purge run. Failures are collected here instead of aborting the
//! purge, and `log` turns them into log lines.

use crate::logger::Logger;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct PurgeResult {
    /// Files removed from disk.
    pub deleted: Vec<PathBuf>,
    /// Dry run needs its own list because nothing was deleted.
    pub would_delete: Vec<PathBuf>,
    /// Files that could not be removed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
    /// Log files left in the directory afterwards.
    pub retained: usize,
}

impl PurgeResult {
    /// Unifies actual and dry-run counts so callers don't need to branch on mode.
    #[must_use]
    pub fn count(&self) -> usize {
        if self.deleted.is_empty() {
            self.would_delete.len()
        } else {
            self.deleted.len()
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Deletions go to DEBUG, failures to WARNING.
    pub fn log(&self, logger: &Logger) {
        for path in &self.deleted {
            logger.debug(&format!("Removed old log file: {}", path.display()));
        }
        for path in &self.would_delete {
            logger.debug(&format!("Would remove old log file: {}", path.display()));
        }
        for (path, reason) in &self.failed {
            logger.warning(&format!(
                "Failed to remove old log file {}: {reason}",
                path.display()
            ));
        }
        if self.count() > 0 || self.has_failures() {
            logger.debug(&format!(
                "Log purge complete: {} removed, {} failed, {} retained",
                self.count(),
                self.failed.len(),
                self.retained
            ));
        }
    }
}
