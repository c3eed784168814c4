//! Tests for TOML configuration.

use addonlog::{Config, Error, Level, Stream};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.general.name, None);
    assert_eq!(config.console_level().unwrap(), Level::Info);
    assert!(config.console.colors);
    assert_eq!(config.console.stream, Stream::Stdout);
    assert_eq!(config.file.max_num_logs, None);
    assert!(!config.file.directory.is_empty());
}

#[test]
fn full_config_maps_to_setup_options() {
    let config = Config::parse(
        r#"
[general]
name = "my_addon"
console_level = "warning"

[console]
colors = false
stream = "stderr"
structure = "{level}: {msg}"

[file]
directory = "/tmp/my_addon"
max_num_logs = 30
structure = "{timestamp} {msg}"
timestamp_format = "%H:%M"
"#,
    )
    .unwrap();

    let options = config.setup_options().unwrap();
    assert_eq!(options.name.as_deref(), Some("my_addon"));
    assert_eq!(options.console_level, Level::Warning);
    assert!(!options.colors);
    assert_eq!(options.console_stream, Stream::Stderr);
    assert_eq!(options.console_structure, "{level}: {msg}");
    assert_eq!(options.directory, std::path::PathBuf::from("/tmp/my_addon"));
    assert_eq!(options.max_num_logs, Some(30));
    assert_eq!(options.file_structure, "{timestamp} {msg}");
    assert_eq!(options.timestamp_format, "%H:%M");
}

#[test]
fn invalid_level_is_reported() {
    let config = Config::parse("[general]\nconsole_level = \"loud\"\n").unwrap();
    assert!(matches!(config.setup_options(), Err(Error::InvalidLevel(l)) if l == "loud"));
}

#[test]
fn syntax_error_is_parse_error() {
    assert!(matches!(Config::parse("[general"), Err(Error::ConfigParse(_))));
}

#[test]
fn tilde_is_expanded() {
    let config = Config::parse("[file]\ndirectory = \"~/logs\"\n").unwrap();
    let dir = config.directory().unwrap();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("logs"));
}

#[test]
fn load_from_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.console_level().unwrap(), Level::Info);
}

#[test]
fn load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logging.toml");
    fs::write(&path, "[file]\nmax_num_logs = 5\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.file.max_num_logs, Some(5));
}

#[test]
fn zero_retention_keeps_only_the_new_log() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("log 01-01-2024 12-00-00.000000.txt");
    fs::write(&old, "old").unwrap();

    let toml = format!(
        "[file]\ndirectory = '{}'\nmax_num_logs = 0\n",
        dir.path().display()
    );
    let config = Config::parse(&toml).unwrap();
    assert_eq!(config.file.max_num_logs, Some(0));

    let mut ctx = addonlog::LogContext::new();
    let options = config.setup_options().unwrap().colors(false);
    let path = addonlog::setup_logger(&mut ctx, &options).unwrap();

    assert!(!old.exists());
    assert!(path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}
