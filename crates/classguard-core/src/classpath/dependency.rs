use std::fmt;
use serde::{Deserialize, Serialize};
use crate::classpath::error::ClasspathError;

/// Suffix of the archives a stage library bundles on its classpath
pub const JAR_SUFFIX: &str = ".jar";

/// A third-party artifact at a specific version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Artifact name, e.g. "netty"
    pub name: String,

    /// Version string exactly as bundled, e.g. "3.10.6.Final"
    pub version: String,
}

impl Dependency {
    /// Create a new dependency
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Derive a dependency from a Maven-style archive name.
    ///
    /// The version starts at the first `-` followed by a dotted number, so
    /// `netty-all-4.1.0.Final.jar` yields `netty-all` at `4.1.0.Final` and a
    /// timestamped snapshot such as `netty-3.1.2-20190101.123456-1.jar` keeps
    /// its timestamp in the version. Without any dotted number the last `-`
    /// followed by a digit is used (`guava-18.jar`).
    pub fn from_jar_file_name(file_name: &str) -> Result<Self, ClasspathError> {
        let stem = file_name
            .strip_suffix(JAR_SUFFIX)
            .ok_or_else(|| ClasspathError::InvalidArchiveName {
                file_name: file_name.to_string(),
                reason: format!("missing '{}' suffix", JAR_SUFFIX),
            })?;

        let candidates: Vec<usize> = stem
            .match_indices('-')
            .map(|(i, _)| i)
            .filter(|i| stem[i + 1..].starts_with(|c: char| c.is_ascii_digit()))
            .collect();

        let split_at = candidates
            .iter()
            .copied()
            .find(|i| starts_dotted_number(&stem[i + 1..]))
            .or_else(|| candidates.last().copied())
            .ok_or_else(|| ClasspathError::InvalidArchiveName {
                file_name: file_name.to_string(),
                reason: "no version part".to_string(),
            })?;

        let (name, version) = (&stem[..split_at], &stem[split_at + 1..]);
        if name.is_empty() {
            return Err(ClasspathError::InvalidArchiveName {
                file_name: file_name.to_string(),
                reason: "empty artifact name".to_string(),
            });
        }

        Ok(Self::new(name, version))
    }
}

/// Whether `text` opens with one or more digits followed by a `.`
fn starts_dotted_number(text: &str) -> bool {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && text[digits..].starts_with('.')
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.version)
    }
}

/// One observation of a dependency inside a stage library
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundledDependency {
    /// Identifier of the stage library bundling the artifact
    pub library: String,

    /// The bundled artifact
    pub dependency: Dependency,
}

impl BundledDependency {
    pub fn new(library: impl Into<String>, dependency: Dependency) -> Self {
        Self {
            library: library.into(),
            dependency,
        }
    }

    pub fn name(&self) -> &str {
        &self.dependency.name
    }

    pub fn version(&self) -> &str {
        &self.dependency.version
    }
}

impl fmt::Display for BundledDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.library, self.dependency.version)
    }
}
