//! Integration tests for the logging registry
//!
//! These tests swap the process-wide logger, so every test is #[serial].
//!
//! Run with: cargo test --test logging_integration_tests

use dual_view::dualview::camera::{Camera, CameraMode};
use dual_view::dualview::config::ViewerConfig;
use dual_view::dualview::log::{Logger, LogEntry, LogSeverity};
use dual_view::dualview::{Diagnostics, Error, Viewer};
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Captures entries for inspection
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Diagnostics::set_logger(Self { entries: entries.clone() });
        Diagnostics::set_min_severity(LogSeverity::Trace);
        entries
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn restore() {
    Diagnostics::reset_logger();
    Diagnostics::set_min_severity(LogSeverity::Trace);
}

// ============================================================================
// REGISTRY
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger_receives_entries() {
    let entries = TestLogger::install();

    Diagnostics::log(LogSeverity::Info, "test::module", "info message".to_string());
    Diagnostics::log(LogSeverity::Warn, "test::module", "warn message".to_string());

    let captured = entries.lock().unwrap().clone();
    restore();

    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].source, "test::module");
    assert_eq!(captured[0].message, "info message");
    assert_eq!(captured[0].file, None);
    assert_eq!(captured[1].severity, LogSeverity::Warn);
}

#[test]
#[serial]
fn test_integration_min_severity_filters() {
    let entries = TestLogger::install();
    Diagnostics::set_min_severity(LogSeverity::Warn);

    Diagnostics::log(LogSeverity::Debug, "test::module", "dropped".to_string());
    Diagnostics::log(LogSeverity::Info, "test::module", "dropped".to_string());
    Diagnostics::log(LogSeverity::Error, "test::module", "kept".to_string());

    let captured = entries.lock().unwrap().clone();
    assert!(!Diagnostics::enabled(LogSeverity::Info));
    assert!(Diagnostics::enabled(LogSeverity::Warn));
    restore();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "kept");
}

#[test]
#[serial]
fn test_integration_error_macro_records_location() {
    let entries = TestLogger::install();

    dual_view::viewer_error!("test::module", "failed with code {}", 7);

    let captured = entries.lock().unwrap().clone();
    restore();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].message, "failed with code 7");
    assert!(captured[0].file.unwrap().ends_with("logging_integration_tests.rs"));
    assert!(captured[0].line.is_some());
}

// ============================================================================
// COMPONENT EVENTS
// ============================================================================

#[test]
#[serial]
fn test_integration_rejected_resize_is_logged() {
    let entries = TestLogger::install();

    let mut camera = Camera::with_mode(CameraMode::Perspective3D);
    let result = camera.resize(800, 0);

    let captured = entries.lock().unwrap().clone();
    restore();

    assert!(matches!(result, Err(Error::InvalidViewport(_))));
    let errors: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source, "dualview::Camera");
    assert!(errors[0].message.contains("800x0"));
    assert!(errors[0].file.is_some());
}

#[test]
#[serial]
fn test_integration_mode_change_is_logged() {
    let entries = TestLogger::install();

    let mut camera = Camera::with_mode(CameraMode::Perspective3D);
    camera.cycle_mode();
    camera.set_mode(CameraMode::Orthographic3D);

    let captured = entries.lock().unwrap().clone();
    restore();

    let infos: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Info && e.source == "dualview::Camera")
        .collect();
    // Setting the current mode again is not a change
    assert_eq!(infos.len(), 1);
    assert!(infos[0].message.contains("3D orthographic"));
}

#[test]
#[serial]
fn test_integration_invalid_config_is_logged() {
    let entries = TestLogger::install();

    let mut config = ViewerConfig::default();
    config.glyph_length = 0.0;
    let result = Viewer::new(config, 800, 600);

    let captured = entries.lock().unwrap().clone();
    restore();

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
    assert!(captured
        .iter()
        .any(|e| e.severity == LogSeverity::Error && e.message.contains("glyph_length")));
}

#[test]
#[serial]
fn test_integration_session_start_and_quit_are_logged() {
    let entries = TestLogger::install();

    let mut viewer = Viewer::new(ViewerConfig::default(), 800, 600).unwrap();
    viewer.handle_window_event(&winit::event::WindowEvent::CloseRequested).unwrap();
    viewer.handle_window_event(&winit::event::WindowEvent::CloseRequested).unwrap();

    let captured = entries.lock().unwrap().clone();
    restore();

    let viewer_infos: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Info && e.source == "dualview::Viewer")
        .map(|e| e.message.as_str())
        .collect();
    assert_eq!(viewer_infos.len(), 2);
    assert!(viewer_infos[0].starts_with("session started"));
    assert_eq!(viewer_infos[1], "quit requested");
}
