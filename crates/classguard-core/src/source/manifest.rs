use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classpath::dependency::Dependency;
use crate::config::format::load_file;
use crate::source::error::SourceError;
use crate::source::DependencySource;

/// Library id -> dependencies it bundles, as written by a loader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryManifest {
    #[serde(default)]
    pub libraries: BTreeMap<String, Vec<Dependency>>,
}

impl LibraryManifest {
    /// Flatten into `(library, dependency)` observations
    pub fn into_observations(self) -> Vec<(String, Dependency)> {
        self.libraries
            .into_iter()
            .flat_map(|(library, deps)| deps.into_iter().map(move |dep| (library.clone(), dep)))
            .collect()
    }
}

/// Reads observations from a manifest file (JSON, TOML or YAML)
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
    name: String,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("manifest:{}", path.display());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DependencySource for ManifestSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn observations(&self) -> Result<Vec<(String, Dependency)>, SourceError> {
        let manifest: LibraryManifest = load_file(&self.path)?;
        log::debug!("Manifest {} lists {} libraries", self.path.display(), manifest.libraries.len());
        Ok(manifest.into_observations())
    }
}
