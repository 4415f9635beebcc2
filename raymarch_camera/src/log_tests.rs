//! Unit tests for log.rs
//!
//! Tests LogSeverity ordering, LogEntry shape, and the DefaultLogger format.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::sync::Mutex;
use std::time::SystemTime;

fn entry(severity: LogSeverity, message: &str, location: Option<(&'static str, u32)>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "raymarch::RayPass".to_string(),
        message: message.to_string(),
        file: location.map(|(f, _)| f),
        line: location.map(|(_, l)| l),
    }
}

const ALL_SEVERITIES: [LogSeverity; 5] = [
    LogSeverity::Trace,
    LogSeverity::Debug,
    LogSeverity::Info,
    LogSeverity::Warn,
    LogSeverity::Error,
];

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_severity_labels_are_fixed_width() {
    for severity in ALL_SEVERITIES {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Error.label(), "ERROR");
    assert_eq!(LogSeverity::Info.label().trim_end(), "INFO");
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_format_without_location() {
    let line = DefaultLogger::format(&entry(LogSeverity::Warn, "no shader bound", None));

    assert!(line.contains("raymarch::RayPass"));
    assert!(line.contains("no shader bound"));
    assert!(line.contains("WARN"));
    assert!(!line.ends_with(')'));
}

#[test]
fn test_default_logger_format_with_location() {
    let line = DefaultLogger::format(&entry(
        LogSeverity::Error,
        "fov out of range",
        Some(("intrinsics.rs", 77)),
    ));

    assert!(line.contains("fov out of range"));
    assert!(line.ends_with("(intrinsics.rs:77)"));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in ALL_SEVERITIES {
        // Just verify it doesn't panic on either branch
        logger.log(&entry(severity, "plain", None));
        logger.log(&entry(severity, "located", Some(("ray_pass.rs", 42))));
    }
}

// ============================================================================
// LOGGER TRAIT TESTS
// ============================================================================

struct CountingLogger {
    logged: Mutex<Vec<LogSeverity>>,
}

impl Logger for CountingLogger {
    fn log(&self, entry: &LogEntry) {
        self.logged.lock().unwrap().push(entry.severity);
    }
}

#[test]
fn test_custom_logger_implementation() {
    let logger = CountingLogger { logged: Mutex::new(Vec::new()) };

    logger.log(&entry(LogSeverity::Info, "frame 1", None));
    logger.log(&entry(LogSeverity::Error, "frame 2", Some(("ray_pass.rs", 1))));

    let logged = logger.logged.lock().unwrap();
    assert_eq!(*logged, vec![LogSeverity::Info, LogSeverity::Error]);
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
    assert_send_sync::<CountingLogger>();
}
