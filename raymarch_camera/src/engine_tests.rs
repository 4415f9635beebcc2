//! Unit tests for the Engine logging facade
//!
//! IMPORTANT: the logger and severity filter are process-wide.
//! All tests are marked with #[serial] to run sequentially.

use crate::raymarch::{Engine, Error};
use crate::raymarch::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

fn install_capture_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        // Other tests log concurrently; keep only this file's sources
        if entry.source.starts_with("test::") {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_custom_logger_receives_entries() {
    let entries = install_capture_logger();

    Engine::log(LogSeverity::Info, "test::module", "hello".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "careful".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[1].message, "careful");
        assert!(captured[0].file.is_none());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_default_filter_drops_trace_and_debug() {
    let entries = install_capture_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);

    Engine::log(LogSeverity::Trace, "test::filter", "per-frame".to_string());
    Engine::log(LogSeverity::Debug, "test::filter", "detail".to_string());
    Engine::log(LogSeverity::Info, "test::filter", "kept".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_set_min_severity_trace_keeps_everything() {
    let entries = install_capture_logger();
    Engine::set_min_severity(LogSeverity::Trace);

    Engine::log(LogSeverity::Trace, "test::filter", "per-frame".to_string());
    Engine::log(LogSeverity::Debug, "test::filter", "detail".to_string());

    assert_eq!(entries.lock().unwrap().len(), 2);

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let entries = install_capture_logger();

    Engine::log_detailed(LogSeverity::Error, "test::filter", "boom".to_string(), "ray_pass.rs", 99);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured[0].file, Some("ray_pass.rs"));
        assert_eq!(captured[0].line, Some(99));
    }
    Engine::reset_logger();
}

// ============================================================================
// ERROR MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_err_logs_and_builds_variant() {
    let entries = install_capture_logger();

    let err = crate::engine_err!("test::err", InvalidParameter, "value {} too large", 7);
    assert_eq!(err, Error::InvalidParameter("value 7 too large".to_string()));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert_eq!(captured[0].source, "test::err");
        assert!(captured[0].file.is_some());
    }
    Engine::reset_logger();
}

#[test]
#[serial]
fn test_engine_bail_returns_early() {
    let _entries = install_capture_logger();

    fn check(value: i32) -> crate::raymarch::Result<i32> {
        if value < 0 {
            crate::engine_bail!("test::err", BackendError, "negative: {}", value);
        }
        Ok(value)
    }

    assert_eq!(check(3), Ok(3));
    assert_eq!(check(-1), Err(Error::BackendError("negative: -1".to_string())));
    Engine::reset_logger();
}
