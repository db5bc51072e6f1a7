//! # Classguard Kernel Errors
//!
//! Defines [`Error`], the top-level error of the crate. Each subsystem keeps
//! its own typed error; this enum wraps them so callers can propagate any of
//! them with `?`.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::classpath::error::ClasspathError;
use crate::config::error::ConfigError;
use crate::source::error::SourceError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// Classpath validation error
    #[error("Classpath error: {0}")]
    Classpath(#[from] ClasspathError),

    /// Whitelist or manifest configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failure while enumerating stage library dependencies
    #[error("Dependency source error: {0}")]
    Source(#[from] SourceError),

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl Error {
    /// Whether this error reports non-whitelisted collisions rather than a
    /// configuration or loading failure
    pub fn is_collision(&self) -> bool {
        matches!(self, Error::Classpath(ClasspathError::CollisionsDetected { .. }))
    }
}
