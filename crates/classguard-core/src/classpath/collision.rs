use std::collections::BTreeSet;
use std::fmt;
use crate::classpath::dependency::BundledDependency;
use crate::classpath::inventory::{Inventory, VersionMap};

/// Artifact names bundled at more than one version across the inventory.
///
/// An artifact seen at a single version never collides, whatever the number
/// of libraries bundling it.
pub fn detect_collisions(inventory: &Inventory) -> BTreeSet<String> {
    inventory
        .artifacts()
        .iter()
        .filter(|(_, versions)| versions.len() > 1)
        .map(|(artifact, _)| artifact.clone())
        .collect()
}

/// All observations of one colliding artifact, bucketed by version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGroup {
    /// Colliding artifact name
    pub artifact: String,
    /// Version string -> observations
    pub versions: VersionMap,
}

impl CollisionGroup {
    /// Create a new collision group
    pub fn new(artifact: impl Into<String>, versions: VersionMap) -> Self {
        Self {
            artifact: artifact.into(),
            versions,
        }
    }

    /// Distinct version strings, sorted
    pub fn distinct_versions(&self) -> Vec<&str> {
        self.versions.keys().map(String::as_str).collect()
    }

    /// Distinct libraries involved in the collision
    pub fn libraries(&self) -> BTreeSet<&str> {
        self.members().map(|bundled| bundled.library.as_str()).collect()
    }

    /// Every observation, version by version
    pub fn members(&self) -> impl Iterator<Item = &BundledDependency> {
        self.versions.values().flatten()
    }
}

impl fmt::Display for CollisionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: Vec<String> = self.members().map(ToString::to_string).collect();
        write!(f, "artifact {}: libraries {{{}}}", self.artifact, members.join(", "))
    }
}
