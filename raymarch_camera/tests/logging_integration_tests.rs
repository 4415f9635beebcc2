//! Integration tests for the logging facade
//!
//! Run with: cargo test --test logging_integration_tests

use raymarch_camera::glam::Vec3;
use raymarch_camera::raymarch::Engine;
use raymarch_camera::raymarch::camera::{Camera, CameraIntrinsics};
use raymarch_camera::raymarch::effect::{RayTraceEffect, RayTraceEffectDesc};
use raymarch_camera::raymarch::log::{Logger, LogEntry, LogSeverity};
use raymarch_camera::raymarch::render::RayPass;
use std::sync::{Arc, Mutex};
use serial_test::serial;

mod cpu_test_host;
use cpu_test_host::CpuRayHost;

struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
#[serial]
fn test_integration_custom_logger_receives_entries() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    Engine::log(LogSeverity::Info, "test::frame", "first".to_string());
    Engine::log(LogSeverity::Error, "test::frame", "second".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].message, "first");
        assert_eq!(captured[1].severity, LogSeverity::Error);
        assert_eq!(captured[1].source, "test::frame");
        assert!(captured[0].file.is_none());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_filters() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);
    Engine::set_min_severity(LogSeverity::Warn);

    Engine::log(LogSeverity::Debug, "test::frame", "dropped".to_string());
    Engine::log(LogSeverity::Info, "test::frame", "dropped".to_string());
    Engine::log(LogSeverity::Warn, "test::frame", "kept".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);

    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
}

#[test]
#[serial]
fn test_integration_invalid_intrinsics_logged_as_error() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let camera = Camera::look_at(
        CameraIntrinsics::new(180.0, 1.0, 0.1),
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
    );
    let mut pass = RayPass::new(RayTraceEffect::from_desc(RayTraceEffectDesc::default()).unwrap());
    let mut host = CpuRayHost::new(4, 4);

    assert!(pass.render_frame(&mut host, &camera).is_err());
    assert_eq!(host.draws, 0);

    {
        let captured = entries.lock().unwrap();
        let errors: Vec<_> = captured.iter()
            .filter(|e| e.severity == LogSeverity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "raymarch::CameraIntrinsics");
        assert!(errors[0].file.is_some());
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_missing_shader_warns_once() {
    let (logger, entries) = TestLogger::new();
    Engine::set_logger(logger);

    let camera = Camera::look_at(
        CameraIntrinsics::new(60.0, 1.0, 0.1),
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
    );
    let mut pass = RayPass::new(RayTraceEffect::from_desc(RayTraceEffectDesc::default()).unwrap());
    let mut host = CpuRayHost::new(4, 4);
    host.shader_available = false;

    for _ in 0..3 {
        pass.render_frame(&mut host, &camera).unwrap();
    }
    assert_eq!(host.blits, 3);

    let warnings = entries.lock().unwrap().iter()
        .filter(|e| e.severity == LogSeverity::Warn && e.source == "raymarch::RayPass")
        .count();
    assert_eq!(warnings, 1);

    Engine::reset_logger();
}
