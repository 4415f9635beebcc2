//! Error types for the ray march camera crate
//!
//! This module defines the error types used throughout the crate,
//! covering camera intrinsics, effect parameters, and host failures.

use std::fmt;

/// Result type for ray march camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ray march camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Camera intrinsics cannot describe a perspective frustum
    /// (aspect <= 0, fov outside (0, 180), near clip <= 0, or non-finite)
    InvalidIntrinsics(String),

    /// Effect parameter outside its accepted range
    InvalidParameter(String),

    /// Render host failure (uniform upload, quad draw, blit)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidIntrinsics(msg) => write!(f, "Invalid camera intrinsics: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
