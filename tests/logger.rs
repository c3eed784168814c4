//! Tests for logger functionality.

mod common;

use addonlog::{Level, LogContext, Logger, OutputKind};
use common::{Capture, capture_logger};

#[test]
fn builder_default() {
    let logger = Logger::builder("addon").build();
    assert_eq!(logger.name(), "addon");
    assert_eq!(logger.min_level(), Level::Info);
    assert_eq!(logger.handler_count(), 0);
}

#[test]
fn builder_takes_most_permissive_handler_level() {
    let logger = Logger::builder("addon")
        .console()
        .level(Level::Warning)
        .colors(false)
        .done()
        .output(Level::Debug, Capture::default())
        .build();
    assert_eq!(logger.min_level(), Level::Debug);
    assert_eq!(logger.handler_count(), 2);
}

#[test]
fn builder_explicit_level_wins() {
    let logger = Logger::builder("addon")
        .level(Level::Error)
        .output(Level::Debug, Capture::default())
        .build();
    assert_eq!(logger.min_level(), Level::Error);
}

#[test]
fn handler_threshold_filters_records() {
    let quiet = Capture::default();
    let loud = Capture::default();
    let logger = Logger::builder("addon")
        .output(Level::Warning, quiet.clone())
        .output(Level::Debug, loud.clone())
        .build();

    logger.debug("d");
    logger.warning("w");

    assert_eq!(quiet.messages(), vec!["w"]);
    assert_eq!(loud.messages(), vec!["d", "w"]);
}

#[test]
fn logger_threshold_filters_before_handlers() {
    let capture = Capture::default();
    let logger = Logger::builder("addon")
        .level(Level::Error)
        .output(Level::Debug, capture.clone())
        .build();

    logger.info("dropped");
    logger.critical("kept");

    assert_eq!(capture.messages(), vec!["kept"]);
}

#[test]
fn record_carries_name_and_call_site() {
    let (logger, capture) = capture_logger("my_addon");
    logger.info("hello");

    let record = &capture.records()[0];
    assert_eq!(record.name, "my_addon");
    assert!(record.location.file().ends_with("logger.rs"));
    assert!(record.location_str().contains("logger.rs:"));
}

#[test]
fn set_console_level_only_touches_console_handlers() {
    let mut logger = Logger::builder("addon")
        .console()
        .level(Level::Warning)
        .colors(false)
        .done()
        .output(Level::Info, Capture::default())
        .build();

    logger.set_console_level(Level::Error);

    let levels: Vec<(OutputKind, Level)> = logger
        .handlers()
        .iter()
        .map(|h| (h.kind(), h.min_level()))
        .collect();
    assert_eq!(
        levels,
        vec![
            (OutputKind::Console, Level::Error),
            (OutputKind::Custom, Level::Info)
        ]
    );
}

#[test]
fn set_console_level_lowers_logger_threshold() {
    let mut logger = Logger::builder("addon")
        .console()
        .level(Level::Warning)
        .done()
        .build();
    assert_eq!(logger.min_level(), Level::Warning);

    logger.set_console_level(Level::Debug);
    assert_eq!(logger.min_level(), Level::Debug);
}

#[test]
fn clear_handlers_detaches_everything() {
    let (mut logger, capture) = capture_logger("addon");
    assert_eq!(logger.clear_handlers(), 1);
    logger.info("nobody listens");
    assert!(capture.records().is_empty());
}

#[test]
fn context_returns_same_logger_per_name() {
    let mut ctx = LogContext::new();
    ctx.logger(Some("a")).add_handler(Level::Debug, Capture::default());

    assert_eq!(ctx.logger(Some("a")).handler_count(), 1);
    assert_eq!(ctx.logger(Some("b")).handler_count(), 0);
    assert_eq!(ctx.len(), 2);
}

#[test]
fn context_none_is_root() {
    let mut ctx = LogContext::new();
    assert_eq!(ctx.logger(None).name(), addonlog::ROOT_LOGGER);
    assert!(ctx.contains(Some("root")));
}
