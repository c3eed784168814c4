//! Separated from the purge engine so callers can construct a policy without
//! importing filesystem internals.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct PurgeOptions {
    /// How many log files survive the purge. Zero removes every unprotected one.
    pub max_num_logs: usize,
    /// The file the active logger writes to: never deleted, counted as retained.
    pub protected: Option<PathBuf>,
    /// Report what would be deleted without touching the filesystem.
    pub dry_run: bool,
}

impl PurgeOptions {
    #[must_use]
    pub const fn new(max_num_logs: usize) -> Self {
        Self {
            max_num_logs,
            protected: None,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn protect(mut self, path: impl Into<PathBuf>) -> Self {
        self.protected = Some(path.into());
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
