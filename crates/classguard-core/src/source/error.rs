//! # Classguard Dependency Source Errors
//!
//! Defines [`SourceError`], raised by the loaders that enumerate what each
//! stage library bundles.
use std::path::PathBuf;
use thiserror::Error;

use crate::config::error::ConfigError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stage library root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Library manifest error: {0}")]
    Manifest(#[from] ConfigError),
}

impl SourceError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        SourceError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}
