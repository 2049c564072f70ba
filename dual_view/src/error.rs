//! Error types for the dual view camera subsystem
//!
//! The numeric core never fails. Errors only come from guards that reject
//! caller input (zero-sized viewports, invalid configuration) and from
//! draw targets supplied by the host.

use std::fmt;

/// Result type for dual view operations
pub type Result<T> = std::result::Result<T, Error>;

/// Dual view errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Viewport with a zero width or height (undefined aspect ratio)
    InvalidViewport(String),

    /// Configuration value outside its valid range
    InvalidConfig(String),

    /// Failure reported by a host draw target
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with file:line and return it.
///
/// ```ignore
/// viewer_bail!("dualview::Camera", InvalidViewport,
///     "zero-sized viewport {}x{}", width, height);
/// ```
#[macro_export]
macro_rules! viewer_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::viewer_error!($source, "{}", message);
        return Err($crate::dualview::Error::$variant(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
