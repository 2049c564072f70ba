//! Logging for the dual view camera subsystem
//!
//! - `Logger` trait for pluggable sinks (console, file, test capture)
//! - `LogSeverity` levels, ordered from `Trace` to `Error`
//! - `DefaultLogger` writes colored lines to the console
//! - `viewer_*!` macros route through `Diagnostics`, which owns the active
//!   logger and the minimum severity filter

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for log entries.
///
/// ```no_run
/// use dual_view::dualview::log::{Logger, LogEntry};
///
/// struct FrameLogger {
///     lines: std::sync::Mutex<Vec<String>>,
/// }
///
/// impl Logger for FrameLogger {
///     fn log(&self, entry: &LogEntry) {
///         self.lines.lock().unwrap().push(entry.message.clone());
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Handle one entry. Called with the logger registry read-locked.
    fn log(&self, entry: &LogEntry);
}

/// One log record.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    /// Wall clock time the entry was produced
    pub timestamp: SystemTime,

    /// Emitting component, e.g. "dualview::Camera", "dualview::Viewer"
    pub source: String,

    pub message: String,

    /// Source file, set by `viewer_error!` only
    pub file: Option<&'static str>,

    /// Source line, set by `viewer_error!` only
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogSeverity {
    /// Per-frame chatter (key lookups, per-camera updates)
    Trace,

    /// State changes useful while developing (resizes, pose changes)
    Debug,

    /// Session level events (mode changes, startup, quit)
    Info,

    /// Recoverable oddities
    Warn,

    /// Rejected input and failed draw targets, with file:line
    Error,
}

impl LogSeverity {
    /// All severities from least to most severe.
    pub const ALL: [LogSeverity; 5] = [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ];

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        Self::ALL[(value as usize).min(Self::ALL.len() - 1)]
    }
}

/// Console logger.
///
/// Format:
/// - `[timestamp] [SEVERITY] [source] message`
/// - `[timestamp] [ERROR] [source] message (file:line)` on stderr
pub struct DefaultLogger;

impl DefaultLogger {
    fn severity_label(severity: LogSeverity) -> ColoredString {
        match severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity = Self::severity_label(entry.severity);
        let source = entry.source.bright_blue();

        let line = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity, source, entry.message, file, line
            ),
            _ => format!("[{}] [{}] [{}] {}", timestamp, severity, source, entry.message),
        };

        if entry.severity == LogSeverity::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```no_run
/// dual_view::viewer_trace!("dualview::Viewer", "no binding for {:?}", "KeyZ");
/// ```
#[macro_export]
macro_rules! viewer_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::dualview::Diagnostics::log(
            $crate::dualview::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! viewer_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::dualview::Diagnostics::log(
            $crate::dualview::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```no_run
/// dual_view::viewer_info!("dualview::Camera", "mode changed to {}", "3D ortho");
/// ```
#[macro_export]
macro_rules! viewer_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::dualview::Diagnostics::log(
            $crate::dualview::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! viewer_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::dualview::Diagnostics::log(
            $crate::dualview::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! viewer_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::dualview::Diagnostics::log_detailed(
            $crate::dualview::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
