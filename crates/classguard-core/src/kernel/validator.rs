use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::classpath::dependency::Dependency;
use crate::classpath::inventory::Inventory;
use crate::classpath::whitelist::Whitelist;
use crate::kernel::constants::WHITELIST_FILE_NAMES;
use crate::kernel::error::Result;
use crate::report::{CollisionFinding, CollisionReport};
use crate::source::DependencySource;

/// Runs one validation pass over the dependencies of a set of stage libraries.
///
/// The validator holds nothing but the shared, read-only whitelist; every
/// pass aggregates a fresh inventory, so independent passes may run on
/// different threads.
#[derive(Debug, Clone)]
pub struct ClasspathValidator {
    whitelist: Arc<Whitelist>,
}

impl ClasspathValidator {
    pub fn new(whitelist: Arc<Whitelist>) -> Self {
        Self { whitelist }
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Validate whatever `source` reports
    pub fn validate_source(&self, source: &dyn DependencySource) -> Result<CollisionReport> {
        log::info!("Collecting stage library dependencies from {}", source.name());
        let observations = source.observations()?;
        Ok(self.validate(observations))
    }

    /// Aggregate, detect and evaluate in one pass
    pub fn validate<I, L>(&self, observations: I) -> CollisionReport
    where
        I: IntoIterator<Item = (L, Dependency)>,
        L: Into<String>,
    {
        let inventory = Inventory::aggregate(observations);
        self.validate_inventory(&inventory)
    }

    /// Evaluate an already aggregated inventory
    pub fn validate_inventory(&self, inventory: &Inventory) -> CollisionReport {
        let groups = inventory.collision_groups();
        log::debug!(
            "{} observations, {} artifacts, {} collisions",
            inventory.observation_count(),
            inventory.len(),
            groups.len()
        );

        let findings = groups
            .into_iter()
            .map(|group| {
                let verdict = self.whitelist.evaluate(&group.artifact, &group.versions);
                CollisionFinding::new(&group, verdict)
            })
            .collect();

        CollisionReport::new(inventory.libraries().len(), inventory.len(), findings)
    }
}

/// First whitelist file present in `dir`, in [`WHITELIST_FILE_NAMES`] order
pub fn find_whitelist_file(dir: &Path) -> Option<PathBuf> {
    WHITELIST_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
