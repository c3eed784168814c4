//! Log file naming. Setup writes names in this shape and the purger only ever
//! touches files that parse back, so unrelated files in the directory are safe.

use chrono::{DateTime, Local, NaiveDateTime};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;

/// Extension of every log file setup creates.
pub const LOG_FILE_EXTENSION: &str = "txt";

const NAME_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H-%M-%S%.6f";
const NAME_TIMESTAMP_PARSE_FORMAT: &str = "%d-%m-%Y %H-%M-%S%.f";

static LOG_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^log (\d{2}-\d{2}-\d{4} \d{2}-\d{2}-\d{2}\.\d{6})\.txt$")
        .expect("Invalid log name regex")
});

/// `log 19-10-2026 14-03-27.123456.txt`: microseconds keep names unique when an
/// add-on is reloaded several times within a second.
#[must_use]
pub fn log_file_name(now: DateTime<Local>) -> String {
    format!(
        "log {}.{LOG_FILE_EXTENSION}",
        now.format(NAME_TIMESTAMP_FORMAT)
    )
}

/// Creation time encoded in a log file name, or `None` for any other file.
#[must_use]
pub fn parse_log_file_name(name: &str) -> Option<NaiveDateTime> {
    let caps = LOG_NAME_REGEX.captures(name)?;
    NaiveDateTime::parse_from_str(&caps[1], NAME_TIMESTAMP_PARSE_FORMAT).ok()
}

/// One log file found in the purge directory.
#[derive(Debug, Clone)]
pub(super) struct LogFile {
    pub path: PathBuf,
    pub created: NaiveDateTime,
    pub modified: Option<SystemTime>,
}

/// Oldest first: name timestamp, then modification time, then name.
pub(super) fn collect_log_files(dir: &Path) -> Result<Vec<LogFile>, crate::Error> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(created) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(parse_log_file_name)
        else {
            continue;
        };

        let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
        files.push(LogFile {
            path,
            created,
            modified,
        });
    }

    files.sort_by(|a, b| {
        a.created
            .cmp(&b.created)
            .then_with(|| a.modified.cmp(&b.modified))
            .then_with(|| a.path.cmp(&b.path))
    });

    Ok(files)
}
