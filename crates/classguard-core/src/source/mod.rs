//! # Classguard Dependency Sources
//!
//! A [`DependencySource`] hands the validator the flat list of
//! `(library, dependency)` observations for the current set of stage
//! libraries. How the libraries were loaded and isolated is the source's
//! business; the validator only sees the observations.
pub mod directory;
pub mod manifest;
pub mod error;

pub use directory::DirectorySource;
pub use manifest::{LibraryManifest, ManifestSource};
pub use error::SourceError;

use crate::classpath::dependency::Dependency;

/// Enumerates the artifacts bundled by every stage library
pub trait DependencySource {
    /// Human readable name used in logs
    fn name(&self) -> &str;

    /// One `(library id, dependency)` pair per bundled artifact per library
    fn observations(&self) -> Result<Vec<(String, Dependency)>, SourceError>;
}

/// In-memory source, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    observations: Vec<(String, Dependency)>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every dependency bundled by `library`
    pub fn with_library<I>(mut self, library: &str, dependencies: I) -> Self
    where
        I: IntoIterator<Item = Dependency>,
    {
        self.observations
            .extend(dependencies.into_iter().map(|dep| (library.to_string(), dep)));
        self
    }
}

impl DependencySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn observations(&self) -> Result<Vec<(String, Dependency)>, SourceError> {
        Ok(self.observations.clone())
    }
}
