use std::collections::{BTreeMap, BTreeSet};
use crate::classpath::collision::{detect_collisions, CollisionGroup};
use crate::classpath::dependency::{BundledDependency, Dependency};

/// Version string -> every observation of the artifact at that version.
///
/// Buckets keep the order in which observations were aggregated.
pub type VersionMap = BTreeMap<String, Vec<BundledDependency>>;

/// Per-artifact view of everything the loaded stage libraries bundle
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    artifacts: BTreeMap<String, VersionMap>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `(library, dependency)` observations by artifact name and version.
    ///
    /// Nothing is dropped, duplicates from the same library included.
    pub fn aggregate<I, L>(observations: I) -> Self
    where
        I: IntoIterator<Item = (L, Dependency)>,
        L: Into<String>,
    {
        let mut inventory = Self::new();
        for (library, dependency) in observations {
            inventory.record(library, dependency);
        }
        inventory
    }

    /// Record a single observation
    pub fn record(&mut self, library: impl Into<String>, dependency: Dependency) {
        self.artifacts
            .entry(dependency.name.clone())
            .or_default()
            .entry(dependency.version.clone())
            .or_default()
            .push(BundledDependency::new(library, dependency));
    }

    /// All artifacts with their version buckets
    pub fn artifacts(&self) -> &BTreeMap<String, VersionMap> {
        &self.artifacts
    }

    /// Version buckets for one artifact
    pub fn versions_of(&self, artifact: &str) -> Option<&VersionMap> {
        self.artifacts.get(artifact)
    }

    /// Number of distinct artifact names
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Total number of observations recorded
    pub fn observation_count(&self) -> usize {
        self.artifacts
            .values()
            .flat_map(|versions| versions.values())
            .map(Vec::len)
            .sum()
    }

    /// Distinct stage libraries that contributed at least one observation
    pub fn libraries(&self) -> BTreeSet<&str> {
        self.artifacts
            .values()
            .flat_map(|versions| versions.values())
            .flatten()
            .map(|bundled| bundled.library.as_str())
            .collect()
    }

    /// Materialize a [`CollisionGroup`] for every artifact [`detect_collisions`] reports
    pub fn collision_groups(&self) -> Vec<CollisionGroup> {
        detect_collisions(self)
            .into_iter()
            .filter_map(|artifact| {
                let versions = self.artifacts.get(&artifact)?.clone();
                Some(CollisionGroup::new(artifact, versions))
            })
            .collect()
    }
}
