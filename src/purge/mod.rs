//! Every setup call leaves a new log file behind: without a retention count the
//! log directory grows for as long as the add-on is installed.

mod files;
mod options;
mod result;

pub use files::{LOG_FILE_EXTENSION, log_file_name, parse_log_file_name};
pub use options::PurgeOptions;
pub use result::PurgeResult;

use files::collect_log_files;
use std::fs;
use std::io;
use std::path::Path;

/// Deletes the oldest log files in `directory` until `max_num_logs` remain.
///
/// Best effort: a file that cannot be removed is recorded in
/// [`PurgeResult::failed`] and the purge moves on. A missing directory is not
/// an error.
///
/// # Errors
/// Listing an existing directory may fail on permission issues.
pub fn purge_old_logs(directory: &Path, options: &PurgeOptions) -> Result<PurgeResult, crate::Error> {
    purge_with(directory, options, |path: &Path| fs::remove_file(path))
}

fn purge_with(
    directory: &Path,
    options: &PurgeOptions,
    remove: impl Fn(&Path) -> io::Result<()>,
) -> Result<PurgeResult, crate::Error> {
    let mut result = PurgeResult::default();

    if !directory.is_dir() {
        return Ok(result);
    }

    let files = collect_log_files(directory)?;
    let is_protected = |path: &Path| {
        options
            .protected
            .as_deref()
            .is_some_and(|p| paths_equal(p, path))
    };

    let protected_count = files.iter().filter(|f| is_protected(f.path.as_path())).count();
    let mut excess = files.len().saturating_sub(options.max_num_logs.max(protected_count));
    result.retained = files.len();

    // Oldest first, so the newest files are the ones left standing
    for file in files.iter().filter(|f| !is_protected(f.path.as_path())) {
        if excess == 0 {
            break;
        }
        excess -= 1;

        if options.dry_run {
            result.would_delete.push(file.path.clone());
            result.retained -= 1;
            continue;
        }

        match remove(file.path.as_path()) {
            Ok(()) => {
                result.deleted.push(file.path.clone());
                result.retained -= 1;
            }
            Err(e) => result.failed.push((file.path.clone(), e.to_string())),
        }
    }

    Ok(result)
}

fn paths_equal(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
