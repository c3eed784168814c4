//! Tests for logger setup and teardown.

use addonlog::purge::parse_log_file_name;
use addonlog::{
    Error, Level, LogContext, OutputKind, SetupOptions, get_log_filepath, setup_logger,
    teardown_logger,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn log_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| parse_log_file_name(name).is_some())
        .collect()
}

#[test]
fn setup_creates_timestamped_file_and_two_handlers() {
    let dir = TempDir::new().unwrap();
    let mut ctx = LogContext::new();

    let options = SetupOptions::new(dir.path()).name("addon").colors(false);
    let path = setup_logger(&mut ctx, &options).unwrap();

    assert!(path.exists());
    assert_eq!(path.parent().unwrap(), dir.path());
    assert!(parse_log_file_name(path.file_name().unwrap().to_str().unwrap()).is_some());

    let logger = ctx.get(Some("addon")).unwrap();
    let kinds: Vec<(OutputKind, Level)> = logger
        .handlers()
        .iter()
        .map(|h| (h.kind(), h.min_level()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (OutputKind::Console, Level::Info),
            (OutputKind::File, Level::Debug)
        ]
    );
    assert_eq!(logger.min_level(), Level::Debug);
}

#[test]
fn file_receives_every_level() {
    let dir = TempDir::new().unwrap();
    let mut ctx = LogContext::new();

    let options = SetupOptions::new(dir.path())
        .console_level(Level::Critical)
        .colors(false)
        .file_structure("{level}|{name}|{msg}");
    let path = setup_logger(&mut ctx, &options).unwrap();

    let logger = ctx.logger(None);
    logger.debug("low");
    logger.error("high");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("   DEBUG|root|low"));
    assert!(content.contains("   ERROR|root|high"));
}

#[test]
fn default_file_line_has_timestamp_and_location() {
    let dir = TempDir::new().unwrap();
    let mut ctx = LogContext::new();

    let path = setup_logger(&mut ctx, &SetupOptions::new(dir.path()).colors(false)).unwrap();
    ctx.logger(None).warning("disk almost full");

    let content = fs::read_to_string(&path).unwrap();
    let line = content
        .lines()
        .find(|l| l.contains("disk almost full"))
        .unwrap();
    assert!(line.starts_with(" WARNING "));
    assert!(line.contains(" root "));
    assert!(line.contains("setup.rs:"));
}

#[test]
fn setup_twice_duplicates_handlers() {
    let dir = TempDir::new().unwrap();
    let mut ctx = LogContext::new();
    let options = SetupOptions::new(dir.path()).name("twice").colors(false);

    setup_logger(&mut ctx, &options).unwrap();
    setup_logger(&mut ctx, &options).unwrap();

    let logger = ctx.logger(Some("twice"));
    assert_eq!(logger.handler_count(), 4);

    logger.info("once");

    let file_paths: Vec<_> = logger
        .handlers()
        .iter()
        .filter_map(|h| h.path().map(Path::to_path_buf))
        .collect();
    assert_eq!(file_paths.len(), 2);
    for path in file_paths {
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("once"));
    }
}

#[test]
fn setup_requires_existing_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let mut ctx = LogContext::new();

    let err = setup_logger(&mut ctx, &SetupOptions::new(&missing)).unwrap_err();
    assert!(matches!(err, Error::DirectoryNotFound(p) if p == missing));
    assert!(!missing.exists());
}

#[test]
fn setup_purges_but_keeps_new_file() {
    let dir = TempDir::new().unwrap();
    for day in 1..=5 {
        let name = format!("log 0{day}-01-2020 10-00-00.000000.txt");
        fs::write(dir.path().join(name), "old").unwrap();
    }

    let mut ctx = LogContext::new();
    let options = SetupOptions::new(dir.path()).colors(false).max_num_logs(3);
    let path = setup_logger(&mut ctx, &options).unwrap();

    let files = log_files(dir.path());
    assert_eq!(files.len(), 3);
    assert!(path.exists());
    assert!(files.contains(&"log 05-01-2020 10-00-00.000000.txt".to_string()));
    assert!(files.contains(&"log 04-01-2020 10-00-00.000000.txt".to_string()));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Removed old log file"));
}

#[test]
fn teardown_and_filepath_lookup() {
    let dir = TempDir::new().unwrap();
    let mut ctx = LogContext::new();

    assert!(get_log_filepath(&ctx, Some("addon")).is_none());

    let options = SetupOptions::new(dir.path()).name("addon").colors(false);
    let path = setup_logger(&mut ctx, &options).unwrap();
    assert_eq!(get_log_filepath(&ctx, Some("addon")), Some(path));

    assert_eq!(teardown_logger(&mut ctx, Some("addon")), 2);
    assert_eq!(ctx.logger(Some("addon")).handler_count(), 0);
    assert!(get_log_filepath(&ctx, Some("addon")).is_none());
    assert_eq!(teardown_logger(&mut ctx, Some("unknown")), 0);
}
